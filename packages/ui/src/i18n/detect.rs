//! Initial locale detection.
//!
//! Candidates are tried in this order and the first supported one wins:
//! stored preference, browser languages, document `lang`, first path segment,
//! first subdomain label. Nothing matching means [`Locale::FALLBACK`].

use super::Locale;

/// Raw locale hints gathered from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleSources {
    pub stored: Option<String>,
    pub navigator: Vec<String>,
    pub html_lang: Option<String>,
    pub path: Option<String>,
    pub hostname: Option<String>,
}

impl LocaleSources {
    fn candidates(&self) -> impl Iterator<Item = &str> {
        self.stored
            .as_deref()
            .into_iter()
            .chain(self.navigator.iter().map(String::as_str))
            .chain(self.html_lang.as_deref())
            .chain(self.path.as_deref().and_then(first_path_segment))
            .chain(self.hostname.as_deref().and_then(subdomain))
    }

    /// Read every hint the browser exposes.
    #[cfg(target_arch = "wasm32")]
    pub fn from_browser(stored: Option<String>) -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                stored,
                ..Self::default()
            };
        };

        let navigator = window
            .navigator()
            .languages()
            .iter()
            .filter_map(|lang| lang.as_string())
            .collect();
        let html_lang = window
            .document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("lang"));
        let location = window.location();

        Self {
            stored,
            navigator,
            html_lang,
            path: location.pathname().ok(),
            hostname: location.hostname().ok(),
        }
    }

    /// Outside the browser only the stored preference is available.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_browser(stored: Option<String>) -> Self {
        Self {
            stored,
            ..Self::default()
        }
    }
}

pub fn detect_locale(sources: &LocaleSources) -> Locale {
    sources
        .candidates()
        .find_map(Locale::from_tag)
        .unwrap_or(Locale::FALLBACK)
}

fn first_path_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|s| !s.is_empty())
}

fn subdomain(hostname: &str) -> Option<&str> {
    let (label, rest) = hostname.split_once('.')?;
    (!rest.is_empty() && !label.is_empty()).then_some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_detected_uses_fallback() {
        assert_eq!(detect_locale(&LocaleSources::default()), Locale::Es);
    }

    #[test]
    fn test_stored_preference_wins() {
        let sources = LocaleSources {
            stored: Some("ca".into()),
            navigator: vec!["en-US".into()],
            ..Default::default()
        };
        assert_eq!(detect_locale(&sources), Locale::Ca);
    }

    #[test]
    fn test_unsupported_candidates_are_skipped() {
        let sources = LocaleSources {
            stored: Some("fr".into()),
            navigator: vec!["de-DE".into(), "en-GB".into()],
            html_lang: Some("ca".into()),
            ..Default::default()
        };
        assert_eq!(detect_locale(&sources), Locale::En);
    }

    #[test]
    fn test_html_lang_before_path() {
        let sources = LocaleSources {
            html_lang: Some("en".into()),
            path: Some("/ca/login".into()),
            ..Default::default()
        };
        assert_eq!(detect_locale(&sources), Locale::En);
    }

    #[test]
    fn test_path_then_subdomain() {
        let sources = LocaleSources {
            path: Some("/login".into()),
            hostname: Some("ca.shoplist.example".into()),
            ..Default::default()
        };
        assert_eq!(detect_locale(&sources), Locale::Ca);

        let sources = LocaleSources {
            path: Some("/en/recipes".into()),
            hostname: Some("ca.shoplist.example".into()),
            ..Default::default()
        };
        assert_eq!(detect_locale(&sources), Locale::En);
    }

    #[test]
    fn test_bare_hostname_has_no_subdomain() {
        assert_eq!(subdomain("localhost"), None);
        assert_eq!(subdomain("es.example.com"), Some("es"));
        assert_eq!(first_path_segment("/"), None);
    }
}
