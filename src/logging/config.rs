//! Logging settings for `rhda-env`
//!
//! The binary's stdout carries `KEY=VALUE` output, so logs always go to
//! stderr. Users tune them through the process environment:
//! - `RHDA_LOG`: filter directives in `EnvFilter` syntax, e.g.
//!   `warn,rhda_config::secrets=debug`
//! - `RHDA_LOG_FORMAT`: `text` or `json`
//! - `RHDA_LOG_DIR`: additionally write a daily rolling file there

use std::path::PathBuf;
use std::str::FromStr;

use super::{LoggingError, LoggingResult};

pub const LOG_FILTER_VAR: &str = "RHDA_LOG";
pub const LOG_FORMAT_VAR: &str = "RHDA_LOG_FORMAT";
pub const LOG_DIR_VAR: &str = "RHDA_LOG_DIR";

/// Base verbosity when no filter directives are given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidSetting {
                var: LOG_FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Overrides `level` when set
    pub directives: Option<String>,
    pub format: LogFormat,
    /// Rolling file directory; stderr only when unset
    pub log_directory: Option<PathBuf>,
}

impl LoggingConfig {
    /// Chatty in debug builds, warnings only in release builds
    pub fn for_build() -> Self {
        let level = if cfg!(debug_assertions) {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        Self::new(level)
    }

    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            directives: None,
            format: LogFormat::default(),
            log_directory: None,
        }
    }

    /// Apply the `RHDA_LOG*` variables from the process environment
    pub fn override_from_env(self) -> LoggingResult<Self> {
        self.override_from(|var| std::env::var(var).ok())
    }

    /// Apply the `RHDA_LOG*` variables as reported by `lookup`.
    /// Empty values are ignored.
    pub fn override_from<F>(mut self, lookup: F) -> LoggingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        if let Some(directives) = read(LOG_FILTER_VAR) {
            self.directives = Some(directives);
        }
        if let Some(format) = read(LOG_FORMAT_VAR) {
            self.format = format.trim().parse()?;
        }
        if let Some(dir) = read(LOG_DIR_VAR) {
            self.log_directory = Some(PathBuf::from(dir));
        }
        Ok(self)
    }
}
