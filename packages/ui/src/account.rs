//! Form submissions for the account pages.
//!
//! Local checks run before anything is sent, so a form that fails them never
//! reaches the network. Successful login and signup store the returned token.

use api::{ApiError, AuthToken, SignupRequest, Transport};
use store::CredentialStore;
use thiserror::Error;

use crate::forms::{validate_new_password, PasswordError};
use crate::session::SessionContext;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] PasswordError),
    #[error("reset token missing")]
    MissingToken,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Log in and keep the issued token.
pub async fn submit_login<S, T>(
    session: &SessionContext<S, T>,
    email: &str,
    password: &str,
) -> Result<AuthToken, ApiError>
where
    S: CredentialStore,
    T: Transport,
{
    let token = session.client().login(email, password).await?;
    session.sign_in(&token);
    Ok(token)
}

/// Validate the new password, create the account and keep the issued token.
pub async fn submit_signup<S, T>(
    session: &SessionContext<S, T>,
    name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<AuthToken, SubmitError>
where
    S: CredentialStore,
    T: Transport,
{
    validate_new_password(password, confirmation)?;
    let request = SignupRequest::new(name, email, password);
    let token = session.client().signup(&request).await?;
    tracing::info!("Account created");
    session.sign_in(&token);
    Ok(token)
}

/// Validate the new password and set it with the emailed reset token.
/// Never touches the stored credential.
pub async fn submit_new_password<S, T>(
    session: &SessionContext<S, T>,
    token: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), SubmitError>
where
    S: CredentialStore,
    T: Transport,
{
    if token.trim().is_empty() {
        return Err(SubmitError::MissingToken);
    }
    validate_new_password(password, confirmation)?;
    session.client().reset_password(token, password).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiClient, ApiConfig, MockTransport};
    use serde_json::json;
    use store::{MemoryStore, SESSION_COOKIE};

    fn session(transport: MockTransport) -> (MemoryStore, SessionContext<MemoryStore, MockTransport>) {
        let store = MemoryStore::new();
        let session = SessionContext::new(
            store.clone(),
            ApiClient::new(ApiConfig::new("http://api.test"), transport),
        );
        (store, session)
    }

    #[tokio::test]
    async fn test_signup_mismatch_sends_nothing() {
        let transport = MockTransport::new();
        let (store, session) = session(transport.clone());

        let result = submit_signup(&session, "Ana", "ana@x.com", "longpassword", "different1").await;
        assert_eq!(result, Err(SubmitError::Invalid(PasswordError::Mismatch)));
        assert!(transport.requests().is_empty());
        assert!(store.get(SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_signup_short_password_sends_nothing() {
        let transport = MockTransport::new();
        let (_store, session) = session(transport.clone());

        let result = submit_signup(&session, "Ana", "ana@x.com", "short", "short").await;
        assert_eq!(
            result,
            Err(SubmitError::Invalid(PasswordError::TooShort { min: 8 }))
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_signup_stores_token() {
        let transport = MockTransport::new().respond(201, r#"{"value":"fresh"}"#);
        let (store, session) = session(transport.clone());

        let token = submit_signup(&session, "Ana", "ana@x.com", "longpassword", "longpassword")
            .await
            .unwrap();
        assert_eq!(token.value, "fresh");
        assert_eq!(store.get(SESSION_COOKIE).as_deref(), Some("fresh"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/api/signup");
        assert_eq!(requests[0].body.as_ref().unwrap()["roles"], json!(["user"]));
    }

    #[tokio::test]
    async fn test_signup_server_error_keeps_session_empty() {
        let transport = MockTransport::new().respond(409, r#"{"message":"Email already registered"}"#);
        let (store, session) = session(transport);

        let err = submit_signup(&session, "Ana", "ana@x.com", "longpassword", "longpassword")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Api(ApiError::Server {
                status: 409,
                message: Some("Email already registered".into()),
            })
        );
        assert!(store.get(SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let transport = MockTransport::new().respond(200, r#"{"value":"tok"}"#);
        let (store, session) = session(transport);

        submit_login(&session, "ana@x.com", "secret").await.unwrap();
        assert_eq!(store.get(SESSION_COOKIE).as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_new_password_mismatch_sends_nothing() {
        let transport = MockTransport::new();
        let (_store, session) = session(transport.clone());

        let result = submit_new_password(&session, "reset-tok", "longpassword", "longpassworx").await;
        assert_eq!(result, Err(SubmitError::Invalid(PasswordError::Mismatch)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_new_password_blank_token_sends_nothing() {
        let transport = MockTransport::new();
        let (_store, session) = session(transport.clone());

        let result = submit_new_password(&session, "  ", "longpassword", "longpassword").await;
        assert_eq!(result, Err(SubmitError::MissingToken));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_new_password_posts_token_without_signing_in() {
        let transport = MockTransport::new().respond(200, r#"{"message":"ok"}"#);
        let (store, session) = session(transport.clone());

        submit_new_password(&session, "reset-tok", "longpassword", "longpassword")
            .await
            .unwrap();
        assert!(store.get(SESSION_COOKIE).is_none());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            Some(json!({"token": "reset-tok", "password": "longpassword"}))
        );
    }
}
