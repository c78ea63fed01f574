//! Display Preferences
//!
//! Key-value persistence for the dark-mode flag. Browsers back this with
//! `localStorage`; tests use [`MemoryPreferences`].

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{MenuError, MenuResult};

/// Storage key for the dark-mode flag, stored as JSON `true`/`false`
pub const DARK_MODE_KEY: &str = "darkMode";

/// Minimal key-value store
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> MenuResult<()>;
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> MenuResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persisted value if present and valid, otherwise the platform signal
pub fn initial_dark_mode(store: &dyn PreferenceStore, system_prefers_dark: bool) -> bool {
    match store.get(DARK_MODE_KEY) {
        Some(raw) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
            debug!(value = %raw, error = %e, "ignoring unreadable dark mode preference");
            system_prefers_dark
        }),
        None => system_prefers_dark,
    }
}

pub fn persist_dark_mode(store: &mut dyn PreferenceStore, enabled: bool) -> MenuResult<()> {
    let raw = serde_json::to_string(&enabled).map_err(|e| MenuError::InvalidInput(e.to_string()))?;
    store.set(DARK_MODE_KEY, &raw)
}
