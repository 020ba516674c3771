//! Landing page with entry points to login and signup.

use dioxus::prelude::*;
use ui::components::LanguagePicker;
use ui::use_i18n;

use super::use_redirect_if_signed_in;
use crate::Route;

#[component]
pub fn Welcome() -> Element {
    let i18n = use_i18n();
    use_redirect_if_signed_in();

    rsx! {
        div {
            class: "welcome",
            div {
                class: "welcome-languages",
                LanguagePicker {}
            }
            div {
                class: "welcome-content",
                h1 { class: "welcome-title", {i18n.t("welcome.title")} }
                p { class: "welcome-subtitle", {i18n.t("welcome.subtitle")} }
                div {
                    class: "welcome-actions",
                    Link {
                        class: "welcome-button welcome-button--login",
                        to: Route::Login {},
                        {i18n.t("welcome.loginButton")}
                    }
                    Link {
                        class: "welcome-button welcome-button--signup",
                        to: Route::Signup {},
                        {i18n.t("welcome.signupButton")}
                    }
                }
            }
        }
    }
}

/// Unknown paths show the welcome page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));
    rsx! {
        Welcome {}
    }
}
