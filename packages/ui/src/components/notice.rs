use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Success => "notice notice--success",
        }
    }
}

/// Inline status line under a form.
#[component]
pub fn Notice(kind: NoticeKind, message: String) -> Element {
    rsx! {
        p {
            class: kind.class(),
            role: if kind == NoticeKind::Error { "alert" } else { "status" },
            "{message}"
        }
    }
}

/// Centered message filling the viewport, used while a page has nothing else
/// to show (loading, fatal error).
#[component]
pub fn FullPageMessage(
    message: String,
    #[props(default)] title: Option<String>,
    #[props(default)] error: bool,
) -> Element {
    rsx! {
        div {
            class: "full-page",
            div {
                class: if error { "full-page-card full-page-card--error" } else { "full-page-card" },
                if let Some(title) = title {
                    p { class: "full-page-title", "{title}" }
                }
                p { "{message}" }
            }
        }
    }
}
