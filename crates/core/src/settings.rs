//! Persisted values for the configurable settings fields

use crate::config::{SessionConfig, SettingsField};
use crate::{CoreResult, KeyValueStore};

/// Reads and writes settings field values under a common key prefix
#[derive(Clone, Debug)]
pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn storage_key(field_key: &str) -> String {
        format!("{}{field_key}", SessionConfig::SETTINGS_KEY_PREFIX)
    }

    pub fn get(&self, field: &SettingsField) -> CoreResult<Option<String>> {
        self.store.get(&Self::storage_key(&field.key))
    }

    /// Store a value; an empty value clears the field
    pub fn set(&self, field: &SettingsField, value: &str) -> CoreResult<()> {
        let key = Self::storage_key(&field.key);
        if value.is_empty() {
            self.store.remove(&key)
        } else {
            self.store.set(&key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn field(key: &str) -> SettingsField {
        SettingsField {
            key: key.to_string(),
            label: key.to_uppercase(),
            placeholder: None,
        }
    }

    #[test]
    fn test_values_are_prefixed() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(backend.clone());
        let channel = field("discord_channel");

        settings.set(&channel, "#live").unwrap();
        assert_eq!(settings.get(&channel).unwrap().as_deref(), Some("#live"));
        assert_eq!(
            backend.get("settings.discord_channel").unwrap().as_deref(),
            Some("#live")
        );
        // Must never collide with the token slot
        assert_eq!(backend.get(SessionConfig::TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_empty_value_clears_field() {
        let backend = MemoryStore::new();
        let settings = SettingsStore::new(backend.clone());
        let channel = field("discord_channel");

        settings.set(&channel, "#live").unwrap();
        settings.set(&channel, "").unwrap();
        assert_eq!(settings.get(&channel).unwrap(), None);
        assert!(backend.is_empty());
    }
}
