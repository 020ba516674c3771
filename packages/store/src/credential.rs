//! # Credential and preference storage traits
//!
//! The client keeps exactly two pieces of state outside component memory:
//!
//! | State | Trait | Browser backing | Lifetime |
//! |-------|-------|-----------------|----------|
//! | Session credential (`userToken`) | [`CredentialStore`] | `document.cookie`, `path=/`, `SameSite=Lax` | [`SESSION_TTL_DAYS`] from issuance |
//! | UI language (`uiLanguage`) | [`PreferenceStore`] | `localStorage` | until overwritten |
//!
//! Both traits are synchronous: cookie and `localStorage` access never suspend.
//! Implementations live in sibling modules ([`crate::MemoryStore`], and
//! `BrowserStore` on wasm with the `web` feature).

/// Name of the cookie that carries the session credential.
pub const SESSION_COOKIE: &str = "userToken";

/// Lifetime of a freshly issued session credential.
pub const SESSION_TTL_DAYS: u32 = 30;

/// `localStorage` key remembering the last chosen UI language.
pub const LOCALE_PREFERENCE_KEY: &str = "uiLanguage";

/// Named, expiring string values scoped to the whole application path.
pub trait CredentialStore {
    /// Persist `value` under `name`, expiring `ttl_days` from now.
    fn set(&self, name: &str, value: &str, ttl_days: u32);

    /// Current value, or `None` when missing, empty or expired.
    fn get(&self, name: &str) -> Option<String>;

    /// Expire `name` immediately. Deleting an absent name is a no-op.
    fn delete(&self, name: &str);
}

/// Non-expiring key/value preferences.
pub trait PreferenceStore {
    fn get_preference(&self, key: &str) -> Option<String>;
    fn set_preference(&self, key: &str, value: &str);
}
