use std::collections::HashMap;

use crate::toggle::ToggleState;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Durable string key/value storage (browser local storage on the page).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

pub fn load_dark_mode(store: &impl PreferenceStore) -> ToggleState {
    ToggleState::from_stored(store.get(DARK_MODE_KEY).as_deref())
}

pub fn save_dark_mode(store: &mut impl PreferenceStore, state: ToggleState) -> Result<(), String> {
    store.set(DARK_MODE_KEY, state.as_stored())
}

/// In-memory store that keeps a log of every write.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_malformed_value_is_off() {
        assert_eq!(load_dark_mode(&MemoryStore::new()), ToggleState::Off);
        let store = MemoryStore::with_value(DARK_MODE_KEY, "yes please");
        assert_eq!(load_dark_mode(&store), ToggleState::Off);
    }

    #[test]
    fn stored_true_is_on() {
        let store = MemoryStore::with_value(DARK_MODE_KEY, "true");
        assert_eq!(load_dark_mode(&store), ToggleState::On);
    }

    #[test]
    fn save_writes_string_flag() {
        let mut store = MemoryStore::new();
        save_dark_mode(&mut store, ToggleState::On).unwrap();
        save_dark_mode(&mut store, ToggleState::Off).unwrap();
        assert_eq!(
            store.writes(),
            &[
                (DARK_MODE_KEY.to_string(), "true".to_string()),
                (DARK_MODE_KEY.to_string(), "false".to_string()),
            ]
        );
    }
}
