//! rhda-env
//!
//! Loads the extension settings, links the on-disk secret store, resolves the
//! telemetry id and prints the mirrored `VSCEXT_*` environment as
//! `KEY=VALUE` lines for a shell to consume.
//!
//! Usage: `rhda-env [settings-file]`
//!
//! Logging goes to stderr and is tuned with `RHDA_LOG`, `RHDA_LOG_FORMAT`
//! and `RHDA_LOG_DIR`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use rhda_config::logging::{LoggingConfig, LoggingSystem};
use rhda_config::{
    FileSecretStorage, GlobalConfig, InstallationIdProvider, LayeredConfiguration,
    MemoryEnvironment,
};

// Single-threaded so mirroring into the process environment has no
// concurrent readers.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::for_build()
        .override_from_env()
        .unwrap_or_else(|e| {
            eprintln!("Ignoring logging overrides: {}", e);
            LoggingConfig::for_build()
        });

    // Keep the logging system alive so file output is flushed on exit
    let _logging_system = match LoggingSystem::init(&logging_config) {
        Ok(system) => Some(system),
        Err(e) => {
            eprintln!("Failed to initialize logging system: {}", e);
            None
        }
    };

    let settings_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(LayeredConfiguration::default_path);
    tracing::info!(path = %settings_path.display(), "Loading settings");

    let environment = Arc::new(MemoryEnvironment::new());
    let mut config = GlobalConfig::from_file(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?
        .with_environment(environment.clone());

    config.link_to_secret_storage(Arc::new(FileSecretStorage::new(
        FileSecretStorage::default_path(),
    )));

    config
        .authorize_rhda(&InstallationIdProvider::default())
        .await
        .context("authorizing dependency analytics")?;

    for (name, value) in environment.snapshot() {
        println!("{}={}", name, value);
    }

    Ok(())
}
