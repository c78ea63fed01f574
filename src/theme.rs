//! Dark Mode Glue
//!
//! Browser side of the dark-mode preference: `localStorage` persistence,
//! the `prefers-color-scheme` signal and the `dark` class on `<html>`.

use menu_core::{MenuError, MenuResult, PreferenceStore};

/// Class toggled on the document element
const DARK_CLASS: &str = "dark";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `PreferenceStore` backed by `window.localStorage`
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> MenuResult<()> {
        let storage = local_storage()
            .ok_or_else(|| MenuError::InvalidInput("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| MenuError::InvalidInput(format!("localStorage write failed: {e:?}")))
    }
}

/// Platform color-scheme signal
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Add or remove the `dark` class on `<html>`
pub fn apply_dark_class(enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = if enabled {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
}
