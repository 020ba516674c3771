use serde::{Deserialize, Serialize};

/// Role requested for every self-registered account.
pub const DEFAULT_ROLE: &str = "user";

/// Token issued by login and signup: `{"value": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub value: String,
}

/// Body of `POST /api/signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<String>,
}

impl SignupRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            roles: vec![DEFAULT_ROLE.to_string()],
        }
    }
}

/// Body of `POST /api/resetPassword`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}
