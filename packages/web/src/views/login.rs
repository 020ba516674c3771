//! Login page: email and password exchanged for a session token.

use dioxus::prelude::*;
use ui::account::submit_login;
use ui::components::{AuthCard, Notice, NoticeKind};
use ui::{use_i18n, use_session};

use super::use_redirect_if_signed_in;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let i18n = use_i18n();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_redirect_if_signed_in();

    let handle_login = {
        let i18n = i18n.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            let i18n = i18n.clone();
            spawn(async move {
                error.set(None);
                loading.set(true);

                match submit_login(&session, &email(), &password()).await {
                    Ok(_) => {
                        nav.push(Route::Dashboard {});
                    }
                    Err(e) => {
                        tracing::warn!("Login failed: {}", e);
                        error.set(Some(i18n.error(&e, "login.genericError")));
                    }
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        AuthCard {
            title: i18n.t("login.pageTitle"),
            form {
                class: "auth-form",
                onsubmit: handle_login,

                div {
                    class: "field-group",
                    label { r#for: "email-address", class: "sr-only", {i18n.t("login.emailPlaceholder")} }
                    input {
                        id: "email-address",
                        class: "field",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        placeholder: i18n.t("login.emailPlaceholder"),
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    label { r#for: "password", class: "sr-only", {i18n.t("login.passwordPlaceholder")} }
                    input {
                        id: "password",
                        class: "field",
                        r#type: "password",
                        autocomplete: "current-password",
                        required: true,
                        placeholder: i18n.t("login.passwordPlaceholder"),
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                div {
                    class: "auth-aside",
                    Link { class: "auth-link", to: Route::ResetPassword { token: String::new() }, {i18n.t("login.forgotPassword")} }
                }

                if let Some(err) = error() {
                    Notice { kind: NoticeKind::Error, message: err }
                }

                button {
                    class: "primary-button",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { {i18n.t("login.submitButtonLoading")} } else { {i18n.t("login.submitButton")} }
                }
            }

            p {
                class: "auth-footer",
                {i18n.t("login.noAccount")}
                " "
                Link { class: "auth-link", to: Route::Signup {}, {i18n.t("login.signupLink")} }
            }
        }
    }
}
