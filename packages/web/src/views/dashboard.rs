use api::UserProfile;
use dioxus::prelude::*;
use ui::{use_i18n, use_session};

use crate::Route;

/// The signed-in user's profile, as resolved by the layout.
#[component]
pub fn Dashboard() -> Element {
    let i18n = use_i18n();
    let session = use_session();
    let nav = use_navigator();
    let profile = use_context::<UserProfile>();

    rsx! {
        div {
            class: "page-container",
            div {
                class: "page-header",
                h1 { class: "page-title", {i18n.t("dashboard.pageTitle")} }
                button {
                    class: "danger-button",
                    r#type: "button",
                    onclick: move |_| {
                        session.sign_out();
                        nav.push(Route::Login {});
                    },
                    {i18n.t("common.logout")}
                }
            }
            div {
                class: "profile-card",
                p {
                    span { class: "profile-label", {i18n.t("dashboard.labels.name")} }
                    " {profile.name}"
                }
                p {
                    span { class: "profile-label", {i18n.t("dashboard.labels.email")} }
                    " {profile.email}"
                }
            }
        }
    }
}
