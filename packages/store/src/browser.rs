//! # Browser store — cookies and `localStorage`
//!
//! [`BrowserStore`] is the [`CredentialStore`] and [`PreferenceStore`]
//! implementation used on the **web platform**. Credentials are written to
//! `document.cookie` with an absolute `expires`, `path=/` and `SameSite=Lax`,
//! so the browser owns expiry. Preferences go to `localStorage`.
//!
//! All methods swallow DOM errors: an unavailable document or storage reads as
//! "absent" and writes are dropped.

use chrono::Utc;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::cookie::{expired_cookie, expiry_after, find_cookie, format_cookie};
use crate::credential::{CredentialStore, PreferenceStore};

/// Zero-size handle onto the current window's cookie jar and `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }

    fn write_cookie(assignment: &str) {
        if let Some(document) = Self::document() {
            let _ = document.set_cookie(assignment);
        }
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for BrowserStore {
    fn set(&self, name: &str, value: &str, ttl_days: u32) {
        let expires = expiry_after(Utc::now(), ttl_days);
        Self::write_cookie(&format_cookie(name, value, Some(expires)));
    }

    fn get(&self, name: &str) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        find_cookie(&cookies, name)
    }

    fn delete(&self, name: &str) {
        Self::write_cookie(&expired_cookie(name));
    }
}

impl PreferenceStore for BrowserStore {
    fn get_preference(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_preference(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
