use shared::{StorageSlot, StoreError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled storage).
pub struct LocalStorageSlot {
    storage: Option<Storage>,
}

impl LocalStorageSlot {
    pub fn new() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }

    fn storage(&self) -> shared::Result<&Storage> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

fn access_error(err: JsValue) -> StoreError {
    StoreError::Access(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl StorageSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> shared::Result<Option<String>> {
        self.storage()?.get_item(key).map_err(access_error)
    }

    fn set(&self, key: &str, value: &str) -> shared::Result<()> {
        self.storage()?.set_item(key, value).map_err(access_error)
    }

    fn remove(&self, key: &str) -> shared::Result<()> {
        self.storage()?.remove_item(key).map_err(access_error)
    }
}
