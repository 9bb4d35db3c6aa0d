//! Secret storage capability
//!
//! The host provides encrypted key/value persistence for sensitive values.
//! This module abstracts it as `store` / `get` / `delete` behind the
//! `SecretStorage` trait, injected into the settings facade at runtime.

mod file;
mod memory;

pub use file::FileSecretStorage;
pub use memory::MemorySecretStorage;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

/// Secret storage errors
#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("Secret storage has not been linked")]
    NotLinked,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Backend(String),
}

/// Result type for secret storage operations
pub type SecretResult<T> = Result<T, SecretStoreError>;

/// Host-provided secret store
#[async_trait]
pub trait SecretStorage: Send + Sync {
    /// Persist `value` under `key`, replacing any previous value
    async fn store(&self, key: &str, value: &SecretString) -> SecretResult<()>;

    /// Read the value under `key`; `None` when nothing is stored
    async fn get(&self, key: &str) -> SecretResult<Option<SecretString>>;

    /// Remove the value under `key`; removing a missing key succeeds
    async fn delete(&self, key: &str) -> SecretResult<()>;
}
