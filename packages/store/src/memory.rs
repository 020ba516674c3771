use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::cookie::expiry_after;
use crate::credential::{CredentialStore, PreferenceStore};

#[derive(Clone, Debug)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory credential and preference store for native builds and tests.
///
/// Clones share the same underlying maps.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    credentials: Arc<Mutex<HashMap<String, Entry>>>,
    preferences: Arc<Mutex<HashMap<String, String>>>,
    clock_offset: Arc<Mutex<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move this store's clock forward, so stored credentials age.
    pub fn advance(&self, by: Duration) {
        let mut offset = self.clock_offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }

    fn now(&self) -> DateTime<Utc> {
        let offset = *self.clock_offset.lock().unwrap_or_else(|e| e.into_inner());
        Utc::now() + offset
    }
}

impl CredentialStore for MemoryStore {
    fn set(&self, name: &str, value: &str, ttl_days: u32) {
        let entry = Entry {
            value: value.to_string(),
            expires_at: expiry_after(self.now(), ttl_days),
        };
        self.credentials
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), entry);
    }

    fn get(&self, name: &str) -> Option<String> {
        let now = self.now();
        let mut credentials = self.credentials.lock().unwrap_or_else(|e| e.into_inner());
        match credentials.get(name) {
            Some(entry) if entry.expires_at <= now => {
                credentials.remove(name);
                None
            }
            Some(entry) if !entry.value.is_empty() => Some(entry.value.clone()),
            _ => None,
        }
    }

    fn delete(&self, name: &str) {
        self.credentials
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name);
    }
}

impl PreferenceStore for MemoryStore {
    fn get_preference(&self, key: &str) -> Option<String> {
        self.preferences
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set_preference(&self, key: &str, value: &str) {
        self.preferences
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }
}
