//! Host configuration storage
//!
//! The extension host owns the user's settings; the facade only needs keyed
//! reads. Two implementations are provided:
//! - `LayeredConfiguration`: a settings file loaded through the `config` crate
//! - `MemoryConfiguration`: an in-process map, used by tests and embedders

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde_json::Value;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load settings from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Keyed read access to host configuration.
///
/// Keys are full dotted paths such as
/// `redHatDependencyAnalytics.mvn.executable.path`. `None` means the key is
/// unset; callers apply their own defaults.
pub trait ConfigurationStorage: Send + Sync {
    /// Read a string value
    fn get_string(&self, key: &str) -> Option<String>;

    /// Read a boolean value
    fn get_bool(&self, key: &str) -> Option<bool>;
}

/// Settings file backed by the `config` crate.
///
/// The file format is inferred from its extension (json, toml, yaml). A
/// missing file is not an error; every key then reads as unset.
pub struct LayeredConfiguration {
    inner: config::Config,
    path: PathBuf,
}

impl LayeredConfiguration {
    /// Load settings from a file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(false))
            .build()
            .map_err(|source| ConfigError::Load {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Loaded settings file");
        Ok(Self { inner, path })
    }

    /// Default settings file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rhda")
            .join("settings.json")
    }

    /// Path the settings were loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lookup<T>(key: &str, result: Result<T, config::ConfigError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(config::ConfigError::NotFound(_)) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring unreadable setting");
                None
            }
        }
    }
}

impl ConfigurationStorage for LayeredConfiguration {
    fn get_string(&self, key: &str) -> Option<String> {
        Self::lookup(key, self.inner.get_string(key))
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        Self::lookup(key, self.inner.get_bool(key))
    }
}

/// In-memory configuration keyed by full dotted path
#[derive(Debug, Default)]
pub struct MemoryConfiguration {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryConfiguration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.write().insert(key.into(), value.into());
    }

    /// Remove a value, making the key unset
    pub fn unset(&self, key: &str) {
        self.values.write().remove(key);
    }
}

impl ConfigurationStorage for MemoryConfiguration {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.read().get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.read().get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}
