//! # Route guard
//!
//! Every page behind the layout needs the same rule: no credential means no
//! request and a redirect to login. Any failed call discards the credential
//! and also redirects. That rule lives here once.
//!
//! | Outcome | Credential afterwards | Page reaction |
//! |---------|-----------------------|---------------|
//! | [`Guarded::Ready`] | kept | render the data |
//! | [`Guarded::Redirect`] | absent | `replace` to `/login` |
//! | [`Guarded::Failed`] | absent | show the error, then `replace` to `/login` |
//!
//! A 401/403 is a silent redirect. Other failures (server errors, malformed
//! bodies, network errors) keep the error so it can be displayed.
//!
//! [`use_guarded`] runs the call inside a `use_resource`, so the request is
//! owned by the calling component and dropped when it unmounts.

use std::future::Future;

use api::{ApiClient, ApiError, HttpTransport, Transport, UserProfile};
use dioxus::prelude::*;
use store::CredentialStore;

use crate::session::{use_session, SessionContext};

/// Result of a guarded call.
#[derive(Debug, Clone, PartialEq)]
pub enum Guarded<R> {
    Ready(R),
    Redirect,
    Failed(ApiError),
}

impl<R> Guarded<R> {
    /// Whether the page must leave for the login route.
    pub fn needs_login(&self) -> bool {
        matches!(self, Guarded::Redirect | Guarded::Failed(_))
    }
}

/// What the layout shows while it resolves the current user.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    Loading,
    Authenticated(UserProfile),
    Failed(ApiError),
    Redirecting,
}

impl GuardState {
    /// `None` is a call still in flight.
    pub fn from_outcome(outcome: Option<Guarded<UserProfile>>) -> Self {
        match outcome {
            None => GuardState::Loading,
            Some(Guarded::Ready(profile)) => GuardState::Authenticated(profile),
            Some(Guarded::Redirect) => GuardState::Redirecting,
            Some(Guarded::Failed(err)) => GuardState::Failed(err),
        }
    }
}

/// Run `call` with the stored credential.
///
/// Without a credential `call` is never invoked. Any failure signs the
/// session out before it is reported.
pub async fn guarded<S, T, R, F, Fut>(session: &SessionContext<S, T>, call: F) -> Guarded<R>
where
    S: CredentialStore,
    T: Transport,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let Some(token) = session.credential() else {
        tracing::info!("No session credential, redirecting to login");
        return Guarded::Redirect;
    };

    match call(token).await {
        Ok(value) => Guarded::Ready(value),
        Err(err) if err.is_auth_failure() => {
            tracing::info!("Session rejected by server, signing out");
            session.sign_out();
            Guarded::Redirect
        }
        Err(err) => {
            tracing::warn!("Guarded call failed, signing out: {}", err);
            session.sign_out();
            Guarded::Failed(err)
        }
    }
}

/// Resolve the profile behind the stored credential.
pub async fn check_session<S, T>(session: &SessionContext<S, T>) -> Guarded<UserProfile>
where
    S: CredentialStore,
    T: Transport + Clone,
{
    let client = session.client().clone();
    guarded(session, |token| async move { client.current_user(&token).await }).await
}

/// Resolve the current user once per mount of the calling component.
pub fn use_current_user() -> Resource<Guarded<UserProfile>> {
    let session = use_session();
    use_resource(move || {
        let session = session.clone();
        async move { check_session(&session).await }
    })
}

/// Run a guarded call scoped to the current component.
///
/// `call` receives a client handle and the credential; it is only invoked
/// when a credential is stored.
pub fn use_guarded<R, F, Fut>(call: F) -> Resource<Guarded<R>>
where
    R: 'static,
    F: Fn(ApiClient<HttpTransport>, String) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
{
    let session = use_session();
    use_resource(move || {
        let session = session.clone();
        let call = call.clone();
        async move {
            let client = session.client().clone();
            guarded(&session, move |token| call(client, token)).await
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiConfig, AuthToken, MockTransport};
    use api::transport::Credentials;
    use store::{MemoryStore, SESSION_COOKIE};

    fn session(transport: MockTransport) -> (MemoryStore, SessionContext<MemoryStore, MockTransport>) {
        let store = MemoryStore::new();
        let session = SessionContext::new(
            store.clone(),
            ApiClient::new(ApiConfig::new("http://api.test"), transport),
        );
        (store, session)
    }

    fn signed_in(transport: MockTransport) -> (MemoryStore, SessionContext<MemoryStore, MockTransport>) {
        let (store, session) = session(transport);
        session.sign_in(&AuthToken { value: "abc".into() });
        (store, session)
    }

    #[tokio::test]
    async fn test_missing_credential_redirects_without_request() {
        let transport = MockTransport::new();
        let (_store, session) = session(transport.clone());

        let outcome = check_session(&session).await;
        assert_eq!(outcome, Guarded::Redirect);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_skips_resource_call() {
        let transport = MockTransport::new();
        let (_store, session) = session(transport.clone());
        let client = session.client().clone();

        let outcome = guarded(&session, |token| async move { client.ingredients(&token).await }).await;
        assert_eq!(outcome, Guarded::Redirect);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_valid_credential_yields_profile() {
        let transport =
            MockTransport::new().respond(200, r#"{"name":"Ana","email":"ana@x.com"}"#);
        let (_store, session) = signed_in(transport.clone());

        let outcome = check_session(&session).await;
        assert_eq!(
            outcome,
            Guarded::Ready(UserProfile {
                name: "Ana".into(),
                email: "ana@x.com".into(),
            })
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/api/me");
        assert_eq!(requests[0].credentials, Credentials::Bearer("abc".into()));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_credential() {
        let transport = MockTransport::new().respond(401, r#"{"message":"expired"}"#);
        let (store, session) = signed_in(transport);

        let outcome = check_session(&session).await;
        assert_eq!(outcome, Guarded::Redirect);
        assert!(store.get(SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_forbidden_on_resource_clears_credential() {
        let transport = MockTransport::new().respond(403, "");
        let (store, session) = signed_in(transport);
        let client = session.client().clone();

        let outcome = guarded(&session, |token| async move { client.recipes(&token).await }).await;
        assert_eq!(outcome, Guarded::Redirect);
        assert!(store.get(SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_server_error_clears_credential_and_keeps_message() {
        let transport = MockTransport::new().respond(500, r#"{"message":"database down"}"#);
        let (store, session) = signed_in(transport);

        let outcome = check_session(&session).await;
        assert!(outcome.needs_login());
        match outcome {
            Guarded::Failed(err) => assert_eq!(err.server_message(), Some("database down")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(store.get(SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_network_error_clears_credential() {
        let transport = MockTransport::new().fail(ApiError::Network("offline".into()));
        let (store, session) = signed_in(transport);

        let outcome = check_session(&session).await;
        assert_eq!(outcome, Guarded::Failed(ApiError::Network("offline".into())));
        assert!(outcome.needs_login());
        assert!(store.get(SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_malformed_collection_body_clears_credential() {
        let transport = MockTransport::new().respond(502, "<html>Bad gateway</html>");
        let (store, session) = signed_in(transport);
        let client = session.client().clone();

        let outcome = guarded(&session, |token| async move { client.ingredients(&token).await }).await;
        assert_eq!(outcome, Guarded::Failed(ApiError::InvalidResponse { status: 502 }));
        assert!(store.get(SESSION_COOKIE).is_none());
    }

    #[test]
    fn test_needs_login() {
        assert!(!Guarded::Ready(()).needs_login());
        assert!(Guarded::<()>::Redirect.needs_login());
        assert!(Guarded::<()>::Failed(ApiError::Network("x".into())).needs_login());
    }

    #[test]
    fn test_guard_state_from_outcome() {
        assert_eq!(GuardState::from_outcome(None), GuardState::Loading);
        assert_eq!(
            GuardState::from_outcome(Some(Guarded::Redirect)),
            GuardState::Redirecting
        );
        assert!(matches!(
            GuardState::from_outcome(Some(Guarded::Ready(UserProfile::default()))),
            GuardState::Authenticated(_)
        ));
    }
}
