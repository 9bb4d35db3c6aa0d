//! Configuration snapshot
//!
//! `Settings` is read once from host configuration storage. Every field has a
//! hard-coded default applied when the key is unset or empty.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::storage::ConfigurationStorage;

/// Severity used when surfacing vulnerable dependencies in the editor.
///
/// Values the extension does not know are kept verbatim in `Other` so the
/// mirrored environment always matches what the host stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum AlertSeverity {
    #[default]
    Error,
    Warning,
    Other(String),
}

impl AlertSeverity {
    pub fn as_str(&self) -> &str {
        match self {
            AlertSeverity::Error => "Error",
            AlertSeverity::Warning => "Warning",
            AlertSeverity::Other(raw) => raw,
        }
    }

    /// Whether the value is one the editor knows how to render
    pub fn is_known(&self) -> bool {
        !matches!(self, AlertSeverity::Other(_))
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AlertSeverity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Error" => AlertSeverity::Error,
            "Warning" => AlertSeverity::Warning,
            _ => AlertSeverity::Other(raw),
        }
    }
}

impl From<AlertSeverity> for String {
    fn from(severity: AlertSeverity) -> Self {
        match severity {
            AlertSeverity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for AlertSeverity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AlertSeverity::from(s.to_string()))
    }
}

/// Setting keys relative to the extension's configuration section
pub mod keys {
    pub const MATCH_MANIFEST_VERSIONS: &str = "matchManifestVersions";
    pub const VULNERABILITY_ALERT_SEVERITY: &str = "vulnerabilityAlertSeverity";
    pub const REPORT_FILE_PATH: &str = "reportFilePath";
    pub const MVN_PATH: &str = "mvn.executable.path";
    pub const NPM_PATH: &str = "npm.executable.path";
    pub const GO_PATH: &str = "go.executable.path";
    pub const PYTHON3_PATH: &str = "python3.executable.path";
    pub const PIP3_PATH: &str = "pip3.executable.path";
    pub const PYTHON_PATH: &str = "python.executable.path";
    pub const PIP_PATH: &str = "pip.executable.path";
}

/// Full dotted key for a setting inside the extension's section
pub fn section_key(key: &str) -> String {
    format!("{CONFIG_SECTION}.{key}")
}

/// Default location of the generated HTML report
pub fn default_report_file_path() -> String {
    std::env::temp_dir()
        .join(REPORT_FILE_NAME)
        .to_string_lossy()
        .into_owned()
}

/// Snapshot of every extension setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub stack_analysis_command: String,
    pub rh_repository_recommendation_notification_command: String,
    pub utm_source: String,
    pub match_manifest_versions: bool,
    pub vulnerability_alert_severity: AlertSeverity,
    pub rhda_report_file_path: String,
    pub exhort_mvn_path: String,
    pub exhort_npm_path: String,
    pub exhort_go_path: String,
    pub exhort_python3_path: String,
    pub exhort_pip3_path: String,
    pub exhort_python_path: String,
    pub exhort_pip_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stack_analysis_command: STACK_ANALYSIS_COMMAND.to_string(),
            rh_repository_recommendation_notification_command:
                REDHAT_REPOSITORY_RECOMMENDATION_NOTIFICATION_COMMAND.to_string(),
            utm_source: UTM_SOURCE.to_string(),
            match_manifest_versions: true,
            vulnerability_alert_severity: AlertSeverity::default(),
            rhda_report_file_path: default_report_file_path(),
            exhort_mvn_path: DEFAULT_MVN_EXECUTABLE.to_string(),
            exhort_npm_path: DEFAULT_NPM_EXECUTABLE.to_string(),
            exhort_go_path: DEFAULT_GO_EXECUTABLE.to_string(),
            exhort_python3_path: DEFAULT_PYTHON3_EXECUTABLE.to_string(),
            exhort_pip3_path: DEFAULT_PIP3_EXECUTABLE.to_string(),
            exhort_python_path: DEFAULT_PYTHON_EXECUTABLE.to_string(),
            exhort_pip_path: DEFAULT_PIP_EXECUTABLE.to_string(),
        }
    }
}

impl Settings {
    /// Read a snapshot from configuration storage, falling back to defaults
    pub fn load(storage: &dyn ConfigurationStorage) -> Self {
        let defaults = Self::default();

        let vulnerability_alert_severity = read_string(storage, keys::VULNERABILITY_ALERT_SEVERITY)
            .map(AlertSeverity::from)
            .unwrap_or(defaults.vulnerability_alert_severity);
        if !vulnerability_alert_severity.is_known() {
            tracing::debug!(
                severity = %vulnerability_alert_severity,
                "Passing through unrecognised alert severity"
            );
        }

        Self {
            match_manifest_versions: storage
                .get_bool(&section_key(keys::MATCH_MANIFEST_VERSIONS))
                .unwrap_or(defaults.match_manifest_versions),
            vulnerability_alert_severity,
            rhda_report_file_path: read_string(storage, keys::REPORT_FILE_PATH)
                .unwrap_or(defaults.rhda_report_file_path),
            exhort_mvn_path: read_string(storage, keys::MVN_PATH)
                .unwrap_or(defaults.exhort_mvn_path),
            exhort_npm_path: read_string(storage, keys::NPM_PATH)
                .unwrap_or(defaults.exhort_npm_path),
            exhort_go_path: read_string(storage, keys::GO_PATH)
                .unwrap_or(defaults.exhort_go_path),
            exhort_python3_path: read_string(storage, keys::PYTHON3_PATH)
                .unwrap_or(defaults.exhort_python3_path),
            exhort_pip3_path: read_string(storage, keys::PIP3_PATH)
                .unwrap_or(defaults.exhort_pip3_path),
            exhort_python_path: read_string(storage, keys::PYTHON_PATH)
                .unwrap_or(defaults.exhort_python_path),
            exhort_pip_path: read_string(storage, keys::PIP_PATH)
                .unwrap_or(defaults.exhort_pip_path),
            ..defaults
        }
    }

    /// Report path as a filesystem path
    pub fn report_path(&self) -> PathBuf {
        PathBuf::from(&self.rhda_report_file_path)
    }
}

// Empty strings are what the host stores for untouched path settings.
fn read_string(storage: &dyn ConfigurationStorage, key: &str) -> Option<String> {
    storage
        .get_string(&section_key(key))
        .filter(|value| !value.is_empty())
}
