//! Browser Storage Backend
//!
//! Persists the item list in `window.localStorage` under `STORAGE_KEY`.

use todo_core::storage::codec;
use todo_core::{Item, ItemStorage, StorageError, StorageResult, STORAGE_KEY};
use wasm_bindgen::JsValue;

/// `localStorage`-backed item storage
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    pub fn new() -> Self {
        Self { key: STORAGE_KEY }
    }

    fn local_storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl ItemStorage for BrowserStorage {
    fn load(&self) -> StorageResult<Option<Vec<Item>>> {
        let raw = self
            .local_storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?;
        raw.as_deref().map(codec::decode).transpose()
    }

    fn save(&self, items: &[Item]) -> StorageResult<()> {
        let raw = codec::encode(items)?;
        self.local_storage()?
            .set_item(self.key, &raw)
            .map_err(|e| StorageError::Write(js_error(&e)))
    }
}
