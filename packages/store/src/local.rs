//! # `window.localStorage` store — browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. Entries survive reloads and are shared by every page of the
//! same origin, which is how the login page hands the signed-in user over to
//! the dashboard.
//!
//! ## Handle management
//!
//! `LocalStorage` is a zero-size struct that looks up
//! `window.localStorage` on every operation. The browser hands back the same
//! `Storage` object each time, and a fresh lookup means a page that lost
//! storage access (e.g. the user cleared site data) reports
//! [`StoreError::Unavailable`] instead of holding a stale handle.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::kv::KeyValueStore;
use crate::StoreError;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StoreError::Unavailable)
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
