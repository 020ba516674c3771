//! # Localization
//!
//! Three UI locales with Spanish as the fallback. The active locale is a
//! signal inside the [`I18n`] context, so every component that translates a
//! string re-renders when the user switches language.
//!
//! | Item | Role |
//! |------|------|
//! | [`Locale`] | Supported languages and tag parsing |
//! | [`catalog`] | Translation tables, fallback lookup, `{{name}}` interpolation |
//! | [`detect`] | Initial locale from stored preference and browser hints |
//! | [`I18n`] | Context handle: translate, switch and persist the locale |

pub mod catalog;
pub mod detect;

use api::{ApiError, Nutrient};
use dioxus::prelude::*;
use store::{PreferenceStore, LOCALE_PREFERENCE_KEY};

use crate::account::SubmitError;
use crate::session::{make_store, PlatformStore};

pub use catalog::{interpolate, translate};
pub use detect::{detect_locale, LocaleSources};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Es,
    Ca,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::Ca];
    pub const FALLBACK: Locale = Locale::Es;

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Ca => "ca",
        }
    }

    /// Parse a language tag such as `ca`, `en-US` or `es_ES` by its primary
    /// subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    /// Catalog key of the language's display name.
    pub fn name_key(self) -> &'static str {
        match self {
            Locale::En => "navbar.userMenu.languages.en",
            Locale::Es => "navbar.userMenu.languages.es",
            Locale::Ca => "navbar.userMenu.languages.ca",
        }
    }
}

/// Catalog key of a nutrient's label.
pub fn nutrient_label_key(nutrient: Nutrient) -> &'static str {
    match nutrient {
        Nutrient::Calories => "ingredientsPage.calories",
        Nutrient::Protein => "ingredientsPage.protein",
        Nutrient::Carbohydrates => "ingredientsPage.carbohydrates",
        Nutrient::Fat => "ingredientsPage.fat",
        Nutrient::Fiber => "ingredientsPage.fiber",
        Nutrient::VitaminD => "ingredientsPage.vitaminD",
        Nutrient::VitaminB12 => "ingredientsPage.vitaminB12",
        Nutrient::VitaminC => "ingredientsPage.vitaminC",
        Nutrient::Iron => "ingredientsPage.iron",
        Nutrient::SaturatedFat => "ingredientsPage.saturatedFat",
        Nutrient::UnsaturatedFat => "ingredientsPage.unsaturatedFat",
        Nutrient::Magnesium => "ingredientsPage.magnesium",
        Nutrient::Zinc => "ingredientsPage.zinc",
    }
}

/// User-facing text for a failed request.
///
/// A server-provided message is shown verbatim; otherwise `template_key` is
/// filled with the status code. Transport and decoding failures get their own
/// generic strings.
pub fn error_message(locale: Locale, err: &ApiError, template_key: &str) -> String {
    match err {
        ApiError::Server {
            message: Some(message),
            ..
        } => message.clone(),
        ApiError::Server { status, .. } | ApiError::Unauthorized { status } => interpolate(
            &translate(locale, template_key),
            &[("statusCode", &status.to_string())],
        ),
        ApiError::InvalidResponse { .. } | ApiError::Decode(_) => {
            translate(locale, "errors.invalidResponse")
        }
        ApiError::Network(_) => translate(locale, "errors.network"),
    }
}

/// User-facing text for a rejected form. Request failures defer to
/// [`error_message`].
pub fn submit_error_message(locale: Locale, err: &SubmitError, template_key: &str) -> String {
    match err {
        SubmitError::Invalid(invalid) => {
            let (key, args) = invalid.message_key();
            let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
            interpolate(&translate(locale, key), &args)
        }
        SubmitError::MissingToken => translate(locale, "setNewPassword.missingToken"),
        SubmitError::Api(err) => error_message(locale, err, template_key),
    }
}

/// Localization context provided at the application root.
#[derive(Clone)]
pub struct I18n {
    locale: Signal<Locale>,
    store: PlatformStore,
}

impl I18n {
    pub fn locale(&self) -> Locale {
        (self.locale)()
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.locale(), key)
    }

    pub fn error(&self, err: &ApiError, template_key: &str) -> String {
        error_message(self.locale(), err, template_key)
    }

    pub fn submit_error(&self, err: &SubmitError, template_key: &str) -> String {
        submit_error_message(self.locale(), err, template_key)
    }

    /// Switch language, remember the choice and update the document `lang`.
    pub fn set_locale(&mut self, locale: Locale) {
        tracing::debug!("Switching locale to {}", locale.code());
        self.store.set_preference(LOCALE_PREFERENCE_KEY, locale.code());
        set_document_lang(locale);
        self.locale.set(locale);
    }
}

/// Detect the initial locale and provide the [`I18n`] context.
pub fn use_i18n_provider() -> I18n {
    use_context_provider(|| {
        let store = make_store();
        let sources = LocaleSources::from_browser(store.get_preference(LOCALE_PREFERENCE_KEY));
        let locale = detect_locale(&sources);
        set_document_lang(locale);
        I18n {
            locale: Signal::new(locale),
            store,
        }
    })
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}

#[cfg(target_arch = "wasm32")]
fn set_document_lang(locale: Locale) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", locale.code());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_document_lang(_locale: Locale) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("es_ES"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("CA"), Some(Locale::Ca));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_error_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Email already registered".into()),
        };
        assert_eq!(
            error_message(Locale::En, &err, "signup.registrationError"),
            "Email already registered"
        );
    }

    #[test]
    fn test_error_message_templates_status() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(
            error_message(Locale::En, &err, "signup.registrationError"),
            "Registration failed (status 500)."
        );
        assert_eq!(
            error_message(Locale::Es, &err, "resetPassword.serverError"),
            "Error del servidor (código 500)."
        );
    }

    #[test]
    fn test_error_message_generic_failures() {
        assert_eq!(
            error_message(Locale::En, &ApiError::InvalidResponse { status: 502 }, "errors.request"),
            "The server sent an invalid response."
        );
        assert_eq!(
            error_message(Locale::En, &ApiError::Decode("eof".into()), "errors.request"),
            "The server sent an invalid response."
        );
        assert_eq!(
            error_message(Locale::En, &ApiError::Network("dns".into()), "errors.request"),
            "Could not reach the server. Please try again."
        );
    }

    #[test]
    fn test_submit_error_messages() {
        use crate::forms::PasswordError;

        assert_eq!(
            submit_error_message(Locale::En, &PasswordError::Mismatch.into(), "signup.registrationError"),
            "Passwords do not match."
        );
        assert_eq!(
            submit_error_message(
                Locale::En,
                &PasswordError::TooShort { min: 8 }.into(),
                "signup.registrationError"
            ),
            "Password must be at least 8 characters long."
        );
        assert_eq!(
            submit_error_message(Locale::En, &SubmitError::MissingToken, "setNewPassword.genericError"),
            "Invalid or missing reset token."
        );
        assert_eq!(
            submit_error_message(
                Locale::En,
                &ApiError::Network("dns".into()).into(),
                "signup.registrationError"
            ),
            "Could not reach the server. Please try again."
        );
    }

    #[test]
    fn test_every_nutrient_has_a_label() {
        for nutrient in Nutrient::ALL {
            let key = nutrient_label_key(nutrient);
            assert!(catalog::lookup(Locale::En, key).is_some(), "{}", key);
        }
    }
}
