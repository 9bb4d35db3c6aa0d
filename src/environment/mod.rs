//! Environment mirror
//!
//! The analysis subprocess reads its configuration from `VSCEXT_*` process
//! environment variables. Writes go through `EnvironmentMirror::apply` so the
//! whole variable set lands in one call and tests can substitute an
//! in-memory target for the real process environment.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::config::constants::ENV_PREFIX;

/// Variable names without the `VSCEXT_` prefix
pub mod vars {
    pub const STACK_ANALYSIS_COMMAND: &str = "STACK_ANALYSIS_COMMAND";
    pub const REDHAT_REPOSITORY_RECOMMENDATION_NOTIFICATION_COMMAND: &str =
        "REDHAT_REPOSITORY_RECOMMENDATION_NOTIFICATION_COMMAND";
    pub const UTM_SOURCE: &str = "UTM_SOURCE";
    pub const EXHORT_SNYK_TOKEN: &str = "EXHORT_SNYK_TOKEN";
    pub const MATCH_MANIFEST_VERSIONS: &str = "MATCH_MANIFEST_VERSIONS";
    pub const VULNERABILITY_ALERT_SEVERITY: &str = "VULNERABILITY_ALERT_SEVERITY";
    pub const RHDA_REPORT_FILE_PATH: &str = "RHDA_REPORT_FILE_PATH";
    pub const EXHORT_MVN_PATH: &str = "EXHORT_MVN_PATH";
    pub const EXHORT_NPM_PATH: &str = "EXHORT_NPM_PATH";
    pub const EXHORT_GO_PATH: &str = "EXHORT_GO_PATH";
    pub const EXHORT_PYTHON3_PATH: &str = "EXHORT_PYTHON3_PATH";
    pub const EXHORT_PIP3_PATH: &str = "EXHORT_PIP3_PATH";
    pub const EXHORT_PYTHON_PATH: &str = "EXHORT_PYTHON_PATH";
    pub const EXHORT_PIP_PATH: &str = "EXHORT_PIP_PATH";
    pub const TELEMETRY_ID: &str = "TELEMETRY_ID";
}

/// Full environment variable name for a mirrored field
pub fn env_name(var: &str) -> String {
    format!("{ENV_PREFIX}{var}")
}

/// Write target for mirrored configuration
pub trait EnvironmentMirror: Send + Sync {
    /// Set every `(name, value)` pair
    fn apply(&self, vars: &[(String, String)]);
}

/// The real process environment.
///
/// `std::env::set_var` races with any concurrent environment read on another
/// thread, so `apply` must only be called from a single sequential writer
/// before worker threads start reading the environment. `rhda-env` runs on a
/// current-thread runtime for this reason.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl EnvironmentMirror for ProcessEnvironment {
    fn apply(&self, vars: &[(String, String)]) {
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        tracing::debug!(count = vars.len(), "Applied configuration to process environment");
    }
}

/// Environment captured in memory
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    vars: RwLock<BTreeMap<String, String>>,
    applies: AtomicUsize,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.read().get(name).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.read().clone()
    }

    /// Number of `apply` calls received
    pub fn apply_count(&self) -> usize {
        self.applies.load(Ordering::SeqCst)
    }
}

impl EnvironmentMirror for MemoryEnvironment {
    fn apply(&self, vars: &[(String, String)]) {
        let mut current = self.vars.write();
        for (name, value) in vars {
            current.insert(name.clone(), value.clone());
        }
        self.applies.fetch_add(1, Ordering::SeqCst);
    }
}
