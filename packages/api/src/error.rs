//! # API errors
//!
//! Every call in [`crate::ApiClient`] fails with one [`ApiError`]. The variants
//! follow how the UI must react, not how the failure happened:
//!
//! | Variant | Cause | UI reaction |
//! |---------|-------|-------------|
//! | [`Unauthorized`](ApiError::Unauthorized) | HTTP 401 or 403 | clear the credential, go to login |
//! | [`Server`](ApiError::Server) | any other non-2xx with a JSON body | show `message`, or a status-templated string |
//! | [`InvalidResponse`](ApiError::InvalidResponse) | non-2xx whose body is not JSON | generic "invalid response" |
//! | [`Decode`](ApiError::Decode) | 2xx whose body does not match the expected type | generic "invalid response" |
//! | [`Network`](ApiError::Network) | the request never produced a response | generic "could not reach server" |
//!
//! Nothing is retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("authentication rejected (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Server { status: u16, message: Option<String> },

    #[error("invalid response from server (HTTP {status})")]
    InvalidResponse { status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Whether the stored credential must be discarded.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Message the server put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure() {
        assert!(ApiError::Unauthorized { status: 401 }.is_auth_failure());
        assert!(!ApiError::Server { status: 500, message: None }.is_auth_failure());
        assert!(!ApiError::Network("down".into()).is_auth_failure());
    }

    #[test]
    fn test_display_prefers_server_message() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Email already registered".into()),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.server_message(), Some("Email already registered"));
        assert_eq!(ApiError::InvalidResponse { status: 502 }.server_message(), None);
    }
}
