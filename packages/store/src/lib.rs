pub mod cookie;
pub mod credential;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use credential::{
    CredentialStore, PreferenceStore, LOCALE_PREFERENCE_KEY, SESSION_COOKIE, SESSION_TTL_DAYS,
};
