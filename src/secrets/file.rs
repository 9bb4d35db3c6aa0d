//! File-backed secret store
//!
//! Secrets live in a single JSON object on disk. Every mutation rewrites the
//! whole file through an owner-only temp file + rename so a crash never
//! leaves a truncated store behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{SecretResult, SecretStorage};

/// Secret store persisted to a JSON file
pub struct FileSecretStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl FileSecretStorage {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default secrets file location
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rhda")
            .join("secrets.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> SecretResult<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> SecretResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let temp_path = self.path.with_extension("json.tmp");
        write_private(&temp_path, content.as_bytes()).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

/// Write `content` to a file only the owner can read.
///
/// A new file is created owner-only. A file left behind by an earlier run keeps
/// its old mode on open, so it is tightened before any content is written.
pub(super) async fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    restrict_permissions(path).await?;
    file.write_all(content).await?;
    file.sync_all().await?;
    Ok(())
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl SecretStorage for FileSecretStorage {
    async fn store(&self, key: &str, value: &SecretString) -> SecretResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.expose_secret().clone());
        self.save(&entries).await?;
        tracing::debug!(key, "Stored secret");
        Ok(())
    }

    async fn get(&self, key: &str) -> SecretResult<Option<SecretString>> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        Ok(entries.remove(key).map(SecretString::new))
    }

    async fn delete(&self, key: &str) -> SecretResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.save(&entries).await?;
            tracing::debug!(key, "Deleted secret");
        }
        Ok(())
    }
}
