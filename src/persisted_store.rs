use folio_core::PreferenceStore;
use web_sys::Storage;

/// [`PreferenceStore`] over the window's local storage.
///
/// When storage is unavailable (privacy mode, sandboxed frames) reads return
/// nothing and writes fail, which leaves the page in its default state.
pub(crate) struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        #[cfg(target_arch = "wasm32")]
        {
            if storage.is_none() {
                gloo::console::warn!("local storage unavailable; preferences will not persist");
            }
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        storage.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let Some(storage) = self.storage.as_ref() else {
            return Err("storage unavailable".to_string());
        };
        storage.set_item(key, value).map_err(|err| {
            let message = err
                .as_string()
                .unwrap_or_else(|| format!("storage set failed for {key}"));
            #[cfg(target_arch = "wasm32")]
            {
                gloo::console::warn!("preference save failed", key, message.clone());
            }
            message
        })
    }
}
