use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::icons::FaBars;
use crate::Icon;

/// Top navigation bar. `children` are the list items; on narrow screens they
/// collapse behind a toggle button.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    let i18n = use_i18n();
    let mut mobile_open = use_signal(|| false);

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                {brand}
                button {
                    class: "navbar-toggle",
                    r#type: "button",
                    aria_expanded: "{mobile_open()}",
                    onclick: move |_| mobile_open.toggle(),
                    span { class: "sr-only", {i18n.t("navbar.openMainMenu")} }
                    Icon { icon: FaBars, width: 20, height: 20 }
                }
                div {
                    class: if mobile_open() { "navbar-links open" } else { "navbar-links" },
                    ul {
                        onclick: move |_| mobile_open.set(false),
                        {children}
                    }
                }
            }
        }
    }
}
