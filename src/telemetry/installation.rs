//! Anonymous installation id persisted on disk

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{TelemetryIdProvider, TelemetryResult};

const ID_FILE_NAME: &str = "installation_id";

/// Resolves a random per-installation id, creating it on first use
pub struct InstallationIdProvider {
    data_directory: PathBuf,
}

impl InstallationIdProvider {
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
        }
    }

    /// Default telemetry data directory
    pub fn default_directory() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join("rhda").join("telemetry")
        } else {
            PathBuf::from("telemetry")
        }
    }

    pub fn id_file(&self) -> PathBuf {
        self.data_directory.join(ID_FILE_NAME)
    }

    async fn read_existing(path: &Path) -> TelemetryResult<Option<String>> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let id = content.trim();
                Ok((!id.is_empty()).then(|| id.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for InstallationIdProvider {
    fn default() -> Self {
        Self::new(Self::default_directory())
    }
}

#[async_trait]
impl TelemetryIdProvider for InstallationIdProvider {
    async fn telemetry_id(&self) -> TelemetryResult<String> {
        let id_file = self.id_file();

        if let Some(id) = Self::read_existing(&id_file).await? {
            return Ok(id);
        }

        let id = uuid::Uuid::new_v4().to_string();
        tokio::fs::create_dir_all(&self.data_directory).await?;
        tokio::fs::write(&id_file, &id).await?;
        tracing::info!("Generated new telemetry installation id");
        Ok(id)
    }
}
