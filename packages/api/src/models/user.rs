use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `/api/me`.
///
/// Extra fields in the payload are ignored; missing ones default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_profile() {
        let user: UserProfile =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com","roles":["user"]}"#).unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@x.com");
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let user: UserProfile = serde_json::from_str(r#"{"email":"ana@x.com"}"#).unwrap();
        assert!(user.name.is_empty());
        assert_eq!(user.email, "ana@x.com");
    }
}
