//! Logging setup
//!
//! Builds a `tracing_subscriber` registry from `LoggingConfig`:
//! - an `EnvFilter` from the base level or the user's directives
//! - a text or JSON fmt layer on stderr (stdout is reserved for output)
//! - an optional daily rolling log file

mod config;

#[cfg(test)]
mod tests;

pub use self::config::{LogFormat, LogLevel, LoggingConfig, LOG_DIR_VAR, LOG_FILTER_VAR, LOG_FORMAT_VAR};

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::{fmt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Logging system errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationError(String),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidSetting { var: &'static str, value: String },
}

/// Result type for logging operations
pub type LoggingResult<T> = Result<T, LoggingError>;

const LOG_FILE_NAME: &str = "rhda.log";

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

/// Installed logging system. Keep it alive so buffered file output is flushed.
pub struct LoggingSystem {
    _guard: Option<WorkerGuard>,
}

impl LoggingSystem {
    /// Install the global subscriber
    pub fn init(config: &LoggingConfig) -> LoggingResult<Self> {
        let env_filter = build_env_filter(config)?;

        let mut layers: Vec<BoxedLayer> = vec![console_layer(config.format)];
        let guard = match &config.log_directory {
            Some(dir) => {
                let (layer, guard) = file_layer(dir, config.format)?;
                layers.push(layer);
                Some(guard)
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layers)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;

        Ok(Self { _guard: guard })
    }
}

/// Build the filter from the user's directives, or the base level
pub fn build_env_filter(config: &LoggingConfig) -> LoggingResult<EnvFilter> {
    match &config.directives {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|_| LoggingError::InvalidSetting {
                var: LOG_FILTER_VAR,
                value: directives.clone(),
            })
        }
        None => Ok(EnvFilter::new(config.level.to_string())),
    }
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    let layer = fmt::layer().with_writer(std::io::stderr);

    match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Text => layer.boxed(),
    }
}

fn file_layer(log_dir: &Path, format: LogFormat) -> LoggingResult<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        LoggingError::DirectoryCreationError(format!(
            "Failed to create log directory {:?}: {}",
            log_dir, e
        ))
    })?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    let layer = match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Text => layer.boxed(),
    };
    Ok((layer, guard))
}
