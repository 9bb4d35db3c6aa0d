//! Extension configuration
//!
//! Provides:
//! - Keyed access to host configuration storage
//! - A typed snapshot of every extension setting with documented defaults
//! - The fixed command ids, secret key and environment prefix

pub mod constants;
mod settings;
mod storage;

pub use settings::{default_report_file_path, keys, section_key, AlertSeverity, Settings};
pub use storage::{
    ConfigError, ConfigResult, ConfigurationStorage, LayeredConfiguration, MemoryConfiguration,
};
