//! Layout for the signed-in pages.
//!
//! On mount it resolves the current user through the guard. Until that
//! settles only a loading line is shown. A missing or rejected credential
//! replaces the route with `/login`. Any other failure is shown while the
//! credential is discarded and the route is replaced as well. Once
//! authenticated the profile is provided as context to the nested pages.

use api::UserProfile;
use dioxus::prelude::*;
use ui::components::{FullPageMessage, Navbar, UserMenu};
use ui::{use_current_user, use_i18n, use_session, GuardState};

use super::use_login_redirect;
use crate::Route;

#[component]
pub fn MainLayout() -> Element {
    let i18n = use_i18n();
    let outcome = use_current_user();
    use_login_redirect(outcome);

    match GuardState::from_outcome(outcome.cloned()) {
        GuardState::Loading => rsx! {
            FullPageMessage { message: i18n.t("common.loading") }
        },
        GuardState::Redirecting => rsx! {},
        GuardState::Failed(err) => rsx! {
            FullPageMessage {
                title: i18n.t("common.error"),
                message: i18n.error(&err, "dashboard.fetchUserError"),
                error: true,
            }
        },
        GuardState::Authenticated(profile) => rsx! {
            SignedInShell { profile }
        },
    }
}

#[component]
fn SignedInShell(profile: UserProfile) -> Element {
    let i18n = use_i18n();
    let session = use_session();
    let nav = use_navigator();
    use_context_provider(|| profile.clone());

    let handle_logout = move |_| {
        session.sign_out();
        nav.push(Route::Login {});
    };

    rsx! {
        Navbar {
            brand: rsx! {
                Link { class: "navbar-brand", to: Route::Dashboard {}, "Shoplist Wiz" }
            },
            li {
                Link { class: "nav-link", active_class: "active", to: Route::Dashboard {}, {i18n.t("navbar.home")} }
            }
            li {
                Link { class: "nav-link", active_class: "active", to: Route::Ingredients {}, {i18n.t("navbar.ingredients")} }
            }
            li {
                Link { class: "nav-link", active_class: "active", to: Route::Recipes {}, {i18n.t("navbar.recipes")} }
            }
            UserMenu { profile, on_logout: handle_logout }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
