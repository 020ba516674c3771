//! # Session context
//!
//! The session credential is the only state shared across pages. Instead of
//! reaching for a global cookie helper, components receive a
//! [`SessionContext`] through Dioxus context ([`use_session`]). It bundles the
//! platform credential store with the API client and exposes the three
//! operations pages need: read ([`credential`](SessionContext::credential)),
//! write ([`sign_in`](SessionContext::sign_in)) and clear
//! ([`sign_out`](SessionContext::sign_out)).
//!
//! The store is chosen per platform, like the rest of the workspace:
//! - **Web** (WASM + `web` feature): [`store::BrowserStore`] (cookies + `localStorage`)
//! - **Native / tests**: [`store::MemoryStore`]

use api::{ApiClient, AuthToken, HttpTransport, Transport};
use dioxus::prelude::*;
use store::{CredentialStore, SESSION_COOKIE, SESSION_TTL_DAYS};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::BrowserStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the credential/preference store for the current platform.
pub fn make_store() -> PlatformStore {
    PlatformStore::new()
}

/// Credential store plus API client, injected into every component that
/// touches the session.
#[derive(Clone, Debug)]
pub struct SessionContext<S = PlatformStore, T = HttpTransport> {
    store: S,
    client: ApiClient<T>,
}

impl SessionContext {
    /// Platform store and a reqwest client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(make_store(), ApiClient::from_env())
    }
}

impl<S: CredentialStore, T: Transport> SessionContext<S, T> {
    pub fn new(store: S, client: ApiClient<T>) -> Self {
        Self { store, client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// The stored session credential, if present and unexpired.
    pub fn credential(&self) -> Option<String> {
        self.store.get(SESSION_COOKIE)
    }

    pub fn is_signed_in(&self) -> bool {
        self.credential().is_some()
    }

    /// Store a freshly issued token for [`SESSION_TTL_DAYS`].
    pub fn sign_in(&self, token: &AuthToken) {
        tracing::info!("Storing session credential");
        self.store.set(SESSION_COOKIE, &token.value, SESSION_TTL_DAYS);
    }

    /// Discard the session credential. Safe to call when none is stored.
    pub fn sign_out(&self) {
        tracing::info!("Clearing session credential");
        self.store.delete(SESSION_COOKIE);
    }
}

/// The session context provided by the application root.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
