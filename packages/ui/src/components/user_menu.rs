//! Avatar button with a dropdown for profile, language and logout.
//!
//! The dropdown closes on any pointer-down outside it, after a language
//! change, and on logout. Outside presses are caught by a transparent layer
//! that sits under the dropdown while it is open.

use api::UserProfile;
use dioxus::prelude::*;

use crate::components::{LanguagePicker, LanguagePickerStyle};
use crate::i18n::use_i18n;
use crate::icons::FaCircleUser;
use crate::Icon;

#[component]
pub fn UserMenu(profile: UserProfile, on_logout: EventHandler<()>) -> Element {
    let i18n = use_i18n();
    let mut open = use_signal(|| false);

    let name = if profile.name.is_empty() {
        i18n.t("navbar.userMenu.defaultName")
    } else {
        profile.name.clone()
    };
    let email = if profile.email.is_empty() {
        i18n.t("navbar.userMenu.defaultEmail")
    } else {
        profile.email.clone()
    };

    rsx! {
        li {
            class: "user-menu",
            button {
                class: "user-menu-button",
                r#type: "button",
                aria_expanded: "{open()}",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    open.toggle();
                },
                span { class: "sr-only", {i18n.t("navbar.userMenu.open")} }
                Icon { icon: FaCircleUser, width: 32, height: 32 }
            }

            if open() {
                div {
                    class: "menu-dismiss",
                    onmousedown: move |_| open.set(false),
                }
                div {
                    class: "user-menu-panel",
                    role: "menu",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    div {
                        class: "user-menu-identity",
                        span { class: "user-menu-name", "{name}" }
                        span { class: "user-menu-email", "{email}" }
                    }
                    div {
                        class: "menu-section",
                        button {
                            class: "menu-item",
                            r#type: "button",
                            role: "menuitem",
                            onclick: move |_| open.set(false),
                            {i18n.t("navbar.userMenu.profile")}
                        }
                    }
                    div {
                        class: "menu-section",
                        span { class: "menu-label", {i18n.t("navbar.userMenu.language")} }
                        LanguagePicker {
                            style: LanguagePickerStyle::Menu,
                            on_change: move |_| open.set(false),
                        }
                    }
                    div {
                        class: "menu-section",
                        button {
                            class: "menu-item",
                            r#type: "button",
                            role: "menuitem",
                            onclick: move |_| {
                                open.set(false);
                                on_logout.call(());
                            },
                            {i18n.t("common.logout")}
                        }
                    }
                }
            }
        }
    }
}
