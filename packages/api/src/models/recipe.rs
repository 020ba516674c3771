use serde::{Deserialize, Serialize};

use super::ResourceId;

/// A recipe. The ingredient list is kept as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<serde_json::Value>,
    #[serde(default, rename = "isForDinner")]
    pub is_for_dinner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_recipe() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id":"r1","name":"Paella","ingredients":[{"id":1},"rice"],"isForDinner":true}"#,
        )
        .unwrap();
        assert_eq!(recipe.id, Some(ResourceId::Text("r1".into())));
        assert_eq!(recipe.name, "Paella");
        assert_eq!(recipe.ingredients.len(), 2);
        assert!(recipe.is_for_dinner);
    }

    #[test]
    fn test_defaults() {
        let recipe: Recipe = serde_json::from_str(r#"{"name":"Soup"}"#).unwrap();
        assert!(recipe.id.is_none());
        assert!(recipe.ingredients.is_empty());
        assert!(!recipe.is_for_dinner);
    }
}
