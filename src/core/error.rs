//! Error types for rhda-config

use thiserror::Error;

use crate::config::ConfigError;
use crate::secrets::SecretStoreError;
use crate::telemetry::TelemetryError;

/// Result type alias for rhda-config operations
pub type Result<T> = std::result::Result<T, RhdaError>;

/// Main error type
#[derive(Error, Debug)]
pub enum RhdaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Secret storage error: {0}")]
    Secrets(#[from] SecretStoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_error_conversion() {
        let err: RhdaError = TelemetryError::Provider("offline".to_string()).into();
        assert!(matches!(err, RhdaError::Telemetry(_)));
        assert_eq!(
            err.to_string(),
            "Telemetry error: Telemetry provider failed: offline"
        );
    }

    #[test]
    fn test_secret_error_message() {
        let err: RhdaError = SecretStoreError::NotLinked.into();
        assert_eq!(
            err.to_string(),
            "Secret storage error: Secret storage has not been linked"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: RhdaError = ConfigError::Load {
            path: "settings.json".into(),
            source: ::config::ConfigError::Message("bad".to_string()),
        }
        .into();
        assert!(matches!(err, RhdaError::Config(ConfigError::Load { .. })));
    }
}
