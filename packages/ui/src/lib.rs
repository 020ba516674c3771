//! This crate contains all shared UI and client-side state for the workspace:
//! the session context, the route guard, localization, search and the
//! components the pages are assembled from.

use dioxus::prelude::*;

pub mod account;
pub mod components;
pub mod editor;
pub mod forms;
pub mod guard;
pub mod i18n;
pub mod search;
pub mod session;
pub mod timer;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use guard::{check_session, guarded, use_current_user, use_guarded, GuardState, Guarded};
pub use i18n::{use_i18n, use_i18n_provider, I18n, Locale};
pub use session::{make_store, use_session, PlatformStore, SessionContext};

pub const UI_CSS: Asset = asset!("/assets/ui.css");
