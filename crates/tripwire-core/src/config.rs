//! Opaque configuration settings.
//!
//! The engine's collaborators read named settings from a [`Config`] built
//! either from an in-memory map or from an INI-style TOML file. Settings
//! are opaque to the core: string-keyed lookups with typed getters.

use std::path::Path;

use crate::error::TripwireError;

/// Named settings consumed by the engine's collaborators.
#[derive(Debug, Clone, Default)]
pub struct Config {
    settings: toml::Table,
}

impl Config {
    /// Build a config from in-memory key/value settings.
    pub fn from_map<K, V>(settings: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<toml::Value>,
    {
        Self {
            settings: settings
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a config from an INI-style TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TripwireError::Config`] if the file cannot be read or
    /// parsed. Configuration errors are fatal to setup.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TripwireError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TripwireError::Config(format!(
                "could not load configuration file {}: {e}",
                path.display()
            ))
        })?;
        let settings = raw.parse::<toml::Table>().map_err(|e| {
            TripwireError::Config(format!(
                "could not parse configuration file {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self { settings })
    }

    /// Look up a setting by dotted key, descending nested tables.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        let mut parts = key.split('.');
        let mut current = self.settings.get(parts.next()?)?;
        for part in parts {
            current = current.as_table()?.get(part)?;
        }
        Some(current)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(toml::Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(toml::Value::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(toml::Value::as_integer)
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}
