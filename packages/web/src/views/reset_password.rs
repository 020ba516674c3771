//! `/reset-password` serves two forms: without a `token` query parameter the
//! user asks for a reset email, with one they choose the new password. A
//! blank token hides the password form behind an error.

use std::time::Duration;

use dioxus::prelude::*;
use ui::account::submit_new_password;
use ui::components::{AuthCard, Notice, NoticeKind};
use ui::timer::sleep;
use ui::{use_i18n, use_session};

use crate::Route;

/// Delay before leaving the confirmation for the login page.
const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[component]
pub fn ResetPassword(token: String) -> Element {
    if token.is_empty() {
        rsx! { RequestReset {} }
    } else {
        rsx! { SetNewPassword { token } }
    }
}

#[component]
fn RequestReset() -> Element {
    let i18n = use_i18n();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_request = {
        let i18n = i18n.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            let i18n = i18n.clone();
            spawn(async move {
                message.set(None);
                error.set(None);
                loading.set(true);
                match session.client().request_password_reset(&email()).await {
                    Ok(()) => {
                        message.set(Some(i18n.t("resetPassword.successMessage")));
                        email.set(String::new());
                    }
                    Err(e) => {
                        tracing::warn!("Reset request failed: {}", e);
                        error.set(Some(i18n.error(&e, "resetPassword.serverError")));
                    }
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        AuthCard {
            title: i18n.t("resetPassword.pageTitle"),
            p { class: "auth-instructions", {i18n.t("resetPassword.instructions")} }
            form {
                class: "auth-form",
                onsubmit: handle_request,

                if let Some(msg) = message() {
                    Notice { kind: NoticeKind::Success, message: msg }
                }
                if let Some(err) = error() {
                    Notice { kind: NoticeKind::Error, message: err }
                }

                label { r#for: "email-address", class: "sr-only", {i18n.t("resetPassword.emailLabel")} }
                input {
                    id: "email-address",
                    class: "field",
                    r#type: "email",
                    autocomplete: "email",
                    required: true,
                    placeholder: i18n.t("resetPassword.emailPlaceholder"),
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                button {
                    class: "primary-button",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { {i18n.t("resetPassword.submitButtonLoading")} } else { {i18n.t("resetPassword.submitButton")} }
                }
            }
            p {
                class: "auth-footer",
                {i18n.t("resetPassword.rememberedPassword")}
                " "
                Link { class: "auth-link", to: Route::Login {}, {i18n.t("resetPassword.loginLink")} }
            }
        }
    }
}

#[component]
fn SetNewPassword(token: String) -> Element {
    let i18n = use_i18n();
    let session = use_session();
    let nav = use_navigator();
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let token_valid = !token.trim().is_empty();

    let handle_submit = {
        let i18n = i18n.clone();
        let token = token.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            let i18n = i18n.clone();
            let token = token.clone();
            spawn(async move {
                message.set(None);
                error.set(None);
                loading.set(true);
                let result =
                    submit_new_password(&session, &token, &password(), &confirm_password()).await;
                match result {
                    Ok(()) => {
                        tracing::info!("Password reset, returning to login");
                        message.set(Some(i18n.t("setNewPassword.successMessage")));
                        password.set(String::new());
                        confirm_password.set(String::new());
                        loading.set(false);
                        sleep(REDIRECT_DELAY).await;
                        nav.replace(Route::Login {});
                    }
                    Err(e) => {
                        tracing::warn!("Password reset failed: {}", e);
                        error.set(Some(i18n.submit_error(&e, "setNewPassword.genericError")));
                        loading.set(false);
                    }
                }
            });
        }
    };

    rsx! {
        AuthCard {
            title: i18n.t("setNewPassword.pageTitle"),
            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(msg) = message() {
                    Notice { kind: NoticeKind::Success, message: msg }
                }
                if let Some(err) = error() {
                    Notice { kind: NoticeKind::Error, message: err }
                }

                if !token_valid {
                    Notice { kind: NoticeKind::Error, message: i18n.t("setNewPassword.missingToken") }
                    p { class: "auth-instructions", {i18n.t("setNewPassword.invalidLink")} }
                } else {
                    div {
                        class: "field-group",
                        label { r#for: "new-password", class: "sr-only", {i18n.t("setNewPassword.passwordPlaceholder")} }
                        input {
                            id: "new-password",
                            class: "field",
                            r#type: "password",
                            autocomplete: "new-password",
                            required: true,
                            placeholder: i18n.t("setNewPassword.passwordPlaceholder"),
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        label { r#for: "confirm-new-password", class: "sr-only", {i18n.t("setNewPassword.confirmPasswordPlaceholder")} }
                        input {
                            id: "confirm-new-password",
                            class: "field",
                            r#type: "password",
                            autocomplete: "new-password",
                            required: true,
                            placeholder: i18n.t("setNewPassword.confirmPasswordPlaceholder"),
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        class: "primary-button",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { {i18n.t("setNewPassword.submitButtonLoading")} } else { {i18n.t("setNewPassword.submitButton")} }
                    }
                }
            }
            p {
                class: "auth-footer",
                Link { class: "auth-link", to: Route::Login {}, {i18n.t("setNewPassword.backToLogin")} }
            }
        }
    }
}
