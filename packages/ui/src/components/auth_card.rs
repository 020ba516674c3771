use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::icons::FaArrowLeft;
use crate::Icon;

/// Centered card shared by the login, signup and password pages, with a
/// back-to-home arrow in the corner.
#[component]
pub fn AuthCard(title: String, children: Element) -> Element {
    let i18n = use_i18n();

    rsx! {
        div {
            class: "auth-page",
            Link {
                class: "auth-back",
                to: "/",
                Icon { icon: FaArrowLeft, width: 24, height: 24 }
                span { class: "sr-only", {i18n.t("common.backToHome")} }
            }
            div {
                class: "auth-card",
                h2 { class: "auth-title", "{title}" }
                {children}
            }
        }
    }
}
