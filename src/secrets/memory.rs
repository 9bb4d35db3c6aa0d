//! In-process secret store

use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

use super::{SecretResult, SecretStorage};

/// Secret store kept in memory for the lifetime of the process
#[derive(Default)]
pub struct MemorySecretStorage {
    entries: RwLock<HashMap<String, SecretString>>,
}

impl MemorySecretStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored secrets
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SecretStorage for MemorySecretStorage {
    async fn store(&self, key: &str, value: &SecretString) -> SecretResult<()> {
        let value = SecretString::new(value.expose_secret().clone());
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> SecretResult<Option<SecretString>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .map(|value| SecretString::new(value.expose_secret().clone())))
    }

    async fn delete(&self, key: &str) -> SecretResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
