//! Settings persistence on top of eframe storage.
//!
//! Values are stored as JSON strings. A stored value that no longer parses
//! is logged and treated as absent, so a bad entry never blocks startup.

use serde::{Deserialize, Serialize};

/// Coordinates typed settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, returning None if it is missing or invalid.
    ///
    /// # Examples
    /// ```ignore
    /// let colors: Option<ThemeDescriptor> =
    ///     SettingsCoordinator::try_load_setting(storage, "theme_preference");
    /// ```
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Saves a setting and flushes the storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, error = %err, "failed to serialize setting"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::MockStorage;
    use super::*;
    use rfolio::ThemeDescriptor;

    #[test]
    fn test_save_and_load_descriptor() {
        let mut storage = MockStorage::default();
        let nord = ThemeDescriptor::from_hex("#2e3440", "#88c0d0", "#4c566a", "#eceff4").unwrap();

        SettingsCoordinator::save_setting(&mut storage, "colors", &nord);

        let loaded: Option<ThemeDescriptor> = SettingsCoordinator::try_load_setting(Some(&storage), "colors");
        assert_eq!(loaded, Some(nord));
    }

    #[test]
    fn test_missing_key_and_missing_storage() {
        let storage = MockStorage::default();

        let loaded: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(loaded, None);

        let loaded: Option<i32> = SettingsCoordinator::try_load_setting(None, "missing");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let mut storage = MockStorage::default();
        storage.data.insert("breakpoint".into(), "not json".into());

        let loaded: Option<f32> = SettingsCoordinator::try_load_setting(Some(&storage), "breakpoint");
        assert_eq!(loaded, None);
    }
}
