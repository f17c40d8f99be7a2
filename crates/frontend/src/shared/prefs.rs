//! Lightweight user preferences persisted to localStorage under fixed
//! string keys (polling interval, panel expansion). Read at page mount,
//! written on change; never part of a controller's own state machine.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn load_pref<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub fn save_pref<T: Serialize>(key: &str, value: &T) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(storage) = window.local_storage().ok().flatten() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(value) {
        let _ = storage.set_item(key, &json);
    }
}
