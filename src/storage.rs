//! Browser Storage
//!
//! `SlotStorage` over `window.localStorage`.

use todo_core::{DomainError, DomainResult, MemoryStorage, SlotStorage};
use wasm_bindgen::JsValue;

/// localStorage-backed slots
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> DomainResult<Self> {
        let window = web_sys::window().ok_or_else(|| DomainError::storage("no window object"))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::storage("localStorage is disabled"))?;
        Ok(Self { storage })
    }
}

impl SlotStorage for BrowserStorage {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// localStorage when the browser allows it, otherwise an in-memory slot
/// that lasts until the page is closed.
pub fn open_browser_storage() -> Box<dyn SlotStorage> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[STORAGE] {}; todos will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}

fn js_error(e: JsValue) -> DomainError {
    DomainError::storage(format!("{:?}", e))
}
