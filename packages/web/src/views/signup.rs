//! Registration page. Password rules are checked locally before the request.

use dioxus::prelude::*;
use ui::account::submit_signup;
use ui::components::{AuthCard, Notice, NoticeKind};
use ui::{use_i18n, use_session};

use super::use_redirect_if_signed_in;
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let i18n = use_i18n();
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_redirect_if_signed_in();

    let handle_signup = {
        let i18n = i18n.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            let i18n = i18n.clone();
            spawn(async move {
                error.set(None);
                loading.set(true);
                let result =
                    submit_signup(&session, &name(), &email(), &password(), &confirm_password()).await;
                match result {
                    Ok(_) => {
                        nav.push(Route::Dashboard {});
                    }
                    Err(e) => {
                        tracing::warn!("Signup failed: {}", e);
                        error.set(Some(i18n.submit_error(&e, "signup.registrationError")));
                    }
                }
                loading.set(false);
            });
        }
    };

    // Typing again clears a stale error.
    let mut edit = move |mut field: Signal<String>, value: String| {
        field.set(value);
        if error.peek().is_some() {
            error.set(None);
        }
    };

    rsx! {
        AuthCard {
            title: i18n.t("signup.pageTitle"),
            form {
                class: "auth-form",
                onsubmit: handle_signup,

                div {
                    class: "field-stack",
                    label { r#for: "name", class: "field-label", {i18n.t("signup.nameLabel")} }
                    input {
                        id: "name",
                        class: "field",
                        r#type: "text",
                        autocomplete: "name",
                        required: true,
                        placeholder: i18n.t("signup.namePlaceholder"),
                        value: name(),
                        oninput: move |evt: FormEvent| edit(name, evt.value()),
                    }
                    label { r#for: "email-address", class: "field-label", {i18n.t("signup.emailLabel")} }
                    input {
                        id: "email-address",
                        class: "field",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        placeholder: i18n.t("signup.emailPlaceholder"),
                        value: email(),
                        oninput: move |evt: FormEvent| edit(email, evt.value()),
                    }
                    label { r#for: "password", class: "field-label", {i18n.t("signup.passwordLabel")} }
                    input {
                        id: "password",
                        class: "field",
                        r#type: "password",
                        autocomplete: "new-password",
                        required: true,
                        placeholder: i18n.t("signup.passwordPlaceholder"),
                        value: password(),
                        oninput: move |evt: FormEvent| edit(password, evt.value()),
                    }
                    label { r#for: "confirm-password", class: "field-label", {i18n.t("signup.confirmPasswordLabel")} }
                    input {
                        id: "confirm-password",
                        class: "field",
                        r#type: "password",
                        autocomplete: "new-password",
                        required: true,
                        placeholder: i18n.t("signup.confirmPasswordPlaceholder"),
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| edit(confirm_password, evt.value()),
                    }
                }

                if let Some(err) = error() {
                    Notice { kind: NoticeKind::Error, message: err }
                }

                button {
                    class: "primary-button",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { {i18n.t("signup.submitButtonLoading")} } else { {i18n.t("signup.submitButton")} }
                }
            }

            p {
                class: "auth-footer",
                {i18n.t("signup.alreadyHaveAccount")}
                " "
                Link { class: "auth-link", to: Route::Login {}, {i18n.t("signup.loginLink")} }
            }
        }
    }
}
