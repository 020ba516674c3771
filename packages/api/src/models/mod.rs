//! Data models exchanged with the REST API.

mod auth;
mod ingredient;
mod recipe;
mod user;

pub use auth::{AuthToken, ResetPasswordRequest, SignupRequest, DEFAULT_ROLE};
pub use ingredient::{Ingredient, Nutrient, NutritionalValues};
pub use recipe::Recipe;
pub use user::UserProfile;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the server. Numeric and string ids are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{n}"),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_accepts_numbers_and_strings() {
        let n: ResourceId = serde_json::from_str("7").unwrap();
        let s: ResourceId = serde_json::from_str("\"a1\"").unwrap();
        assert_eq!(n, ResourceId::Number(7));
        assert_eq!(s, ResourceId::Text("a1".into()));
        assert_eq!(n.to_string(), "7");
        assert_eq!(s.to_string(), "a1");
    }
}
