//! Telemetry identifier resolution
//!
//! The analysis backend tags requests with an anonymous telemetry id. The id
//! is issued by an external provider; the settings facade resolves it once
//! and caches it for the rest of the process.

mod installation;


pub use installation::InstallationIdProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Telemetry errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Telemetry provider failed: {0}")]
    Provider(String),
}

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Source of the telemetry identifier
#[async_trait]
pub trait TelemetryIdProvider: Send + Sync {
    /// Resolve the identifier for this installation
    async fn telemetry_id(&self) -> TelemetryResult<String>;
}

/// Provider returning a fixed id
#[derive(Debug, Clone)]
pub struct StaticTelemetryId(pub String);

#[async_trait]
impl TelemetryIdProvider for StaticTelemetryId {
    async fn telemetry_id(&self) -> TelemetryResult<String> {
        Ok(self.0.clone())
    }
}
