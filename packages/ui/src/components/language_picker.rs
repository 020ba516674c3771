use dioxus::prelude::*;

use crate::i18n::{use_i18n, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguagePickerStyle {
    /// Row of pill buttons, as on the welcome page.
    #[default]
    Pills,
    /// Stacked menu items, as inside the user menu.
    Menu,
}

/// One button per supported locale. The active locale is highlighted.
#[component]
pub fn LanguagePicker(
    #[props(default)] style: LanguagePickerStyle,
    #[props(default)] on_change: Option<EventHandler<Locale>>,
) -> Element {
    let i18n = use_i18n();
    let current = i18n.locale();

    let (container, item) = match style {
        LanguagePickerStyle::Pills => ("language-pills", "language-pill"),
        LanguagePickerStyle::Menu => ("language-menu", "menu-item"),
    };

    let options = Locale::ALL.map(|locale| {
        let class = if locale == current {
            format!("{} active", item)
        } else {
            item.to_string()
        };
        (locale, class, i18n.t(locale.name_key()))
    });

    rsx! {
        div {
            class: container,
            for (locale, class, label) in options {
                button {
                    key: "{locale.code()}",
                    r#type: "button",
                    class: "{class}",
                    onclick: {
                        let mut i18n = i18n.clone();
                        move |_| {
                            i18n.set_locale(locale);
                            if let Some(handler) = on_change {
                                handler.call(locale);
                            }
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}
