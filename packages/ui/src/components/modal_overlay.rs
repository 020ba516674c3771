use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or on the close control triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let i18n = use_i18n();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        title: i18n.t("common.close"),
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}
