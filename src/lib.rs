//! rhda-config - settings for the dependency analytics extension
//!
//! This crate provides:
//! - A typed snapshot of the extension settings with documented defaults
//! - Mirroring of those settings into `VSCEXT_*` environment variables
//!   for the analysis subprocess
//! - Snyk token persistence through an injected secret store
//! - A lazily resolved, cached telemetry id
//! - Structured logging setup

pub mod config;
pub mod core;
pub mod environment;
pub mod facade;
pub mod logging;
pub mod notification;
pub mod secrets;
pub mod telemetry;

// Re-export commonly used items
pub use crate::config::{AlertSeverity, ConfigurationStorage, LayeredConfiguration, Settings};
pub use crate::core::error::{Result, RhdaError};
pub use crate::environment::{EnvironmentMirror, MemoryEnvironment, ProcessEnvironment};
pub use crate::facade::GlobalConfig;
pub use crate::notification::{Notifier, TracingNotifier};
pub use crate::secrets::{FileSecretStorage, SecretStorage, SecretStoreError};
pub use crate::telemetry::{InstallationIdProvider, TelemetryIdProvider};
