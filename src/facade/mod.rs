//! Settings facade
//!
//! `GlobalConfig` is the single entry point the extension uses for its
//! settings. It:
//! - holds the configuration snapshot and exposes it as read-only properties
//! - mirrors the snapshot, telemetry id and Snyk token into `VSCEXT_*`
//!   environment variables for the analysis subprocess
//! - stores, reads and clears the Snyk token through an injected secret store
//!
//! Secret store failures never escape: they are reported through the
//! `Notifier` and the operation degrades to an empty token or a no-op.


use std::path::Path;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::config::constants::SNYK_TOKEN_KEY;
use crate::config::{AlertSeverity, ConfigurationStorage, LayeredConfiguration, Settings};
use crate::core::error::Result;
use crate::environment::{env_name, vars, EnvironmentMirror, ProcessEnvironment};
use crate::notification::{Notifier, TracingNotifier};
use crate::secrets::{SecretResult, SecretStorage, SecretStoreError};
use crate::telemetry::TelemetryIdProvider;

/// Extension settings, secret token and environment mirror
pub struct GlobalConfig {
    settings: Settings,
    exhort_snyk_token: SecretString,
    telemetry_id: Option<String>,
    secrets: Option<Arc<dyn SecretStorage>>,
    notifier: Arc<dyn Notifier>,
    environment: Arc<dyn EnvironmentMirror>,
}

impl GlobalConfig {
    /// Load the configuration snapshot from host storage.
    ///
    /// Notifications go to the log and the mirror targets the process
    /// environment until replaced with `with_notifier` / `with_environment`.
    pub fn new(storage: &dyn ConfigurationStorage) -> Self {
        Self {
            settings: Settings::load(storage),
            exhort_snyk_token: empty_token(),
            telemetry_id: None,
            secrets: None,
            notifier: Arc::new(TracingNotifier),
            environment: Arc::new(ProcessEnvironment),
        }
    }

    /// Load the configuration snapshot from a settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let storage = LayeredConfiguration::load(path)?;
        Ok(Self::new(&storage))
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_environment(mut self, environment: Arc<dyn EnvironmentMirror>) -> Self {
        self.environment = environment;
        self
    }

    /// Bind the secret store, replacing any previous binding
    pub fn link_to_secret_storage(&mut self, secrets: Arc<dyn SecretStorage>) {
        self.secrets = Some(secrets);
    }

    /// Re-read the configuration snapshot after a host configuration change.
    /// The telemetry id and token are kept.
    pub fn reload(&mut self, storage: &dyn ConfigurationStorage) {
        self.settings = Settings::load(storage);
        tracing::debug!("Reloaded extension settings");
    }

    /// Resolve the telemetry id (once) and mirror the full configuration,
    /// telemetry id and current Snyk token into the environment.
    ///
    /// A provider failure is returned and leaves the environment untouched.
    pub async fn authorize_rhda(&mut self, provider: &dyn TelemetryIdProvider) -> Result<()> {
        if self.telemetry_id.is_none() {
            let id = provider.telemetry_id().await?;
            tracing::debug!("Resolved telemetry id");
            self.telemetry_id = Some(id);
        }

        self.exhort_snyk_token = self.get_snyk_token().await;
        self.apply_to_environment();
        Ok(())
    }

    /// Every `(name, value)` pair mirrored into the environment
    pub fn environment_variables(&self) -> Vec<(String, String)> {
        let s = &self.settings;
        [
            (vars::STACK_ANALYSIS_COMMAND, s.stack_analysis_command.clone()),
            (
                vars::REDHAT_REPOSITORY_RECOMMENDATION_NOTIFICATION_COMMAND,
                s.rh_repository_recommendation_notification_command.clone(),
            ),
            (vars::UTM_SOURCE, s.utm_source.clone()),
            (
                vars::EXHORT_SNYK_TOKEN,
                self.exhort_snyk_token.expose_secret().clone(),
            ),
            (
                vars::MATCH_MANIFEST_VERSIONS,
                s.match_manifest_versions.to_string(),
            ),
            (
                vars::VULNERABILITY_ALERT_SEVERITY,
                s.vulnerability_alert_severity.to_string(),
            ),
            (vars::RHDA_REPORT_FILE_PATH, s.rhda_report_file_path.clone()),
            (vars::EXHORT_MVN_PATH, s.exhort_mvn_path.clone()),
            (vars::EXHORT_NPM_PATH, s.exhort_npm_path.clone()),
            (vars::EXHORT_GO_PATH, s.exhort_go_path.clone()),
            (vars::EXHORT_PYTHON3_PATH, s.exhort_python3_path.clone()),
            (vars::EXHORT_PIP3_PATH, s.exhort_pip3_path.clone()),
            (vars::EXHORT_PYTHON_PATH, s.exhort_python_path.clone()),
            (vars::EXHORT_PIP_PATH, s.exhort_pip_path.clone()),
            (
                vars::TELEMETRY_ID,
                self.telemetry_id.clone().unwrap_or_default(),
            ),
        ]
        .into_iter()
        .map(|(name, value)| (env_name(name), value))
        .collect()
    }

    fn apply_to_environment(&self) {
        let vars = self.environment_variables();
        self.environment.apply(&vars);
    }

    /// Save the Snyk token. `None` is ignored.
    pub async fn set_snyk_token(&self, token: Option<SecretString>) {
        let Some(token) = token else {
            return;
        };

        match self.store_token(&token).await {
            Ok(()) => tracing::debug!("Saved Snyk token"),
            Err(e) => self.notifier.show_error(&format!(
                "Failed to save Snyk token to Secret Storage, Error: {e}"
            )),
        }
    }

    /// Read the Snyk token, or an empty token when none is stored.
    ///
    /// An unreadable entry is reported, deleted, and read as empty.
    pub async fn get_snyk_token(&self) -> SecretString {
        match self.read_token().await {
            Ok(Some(token)) => token,
            Ok(None) => empty_token(),
            Err(e) => {
                self.notifier.show_error(&format!(
                    "Failed to get Snyk token from Secret Storage, Error: {e}"
                ));
                if let Err(cleanup) = self.delete_token().await {
                    tracing::warn!(error = %cleanup, "Failed to remove unreadable Snyk token");
                }
                empty_token()
            }
        }
    }

    /// Remove the stored Snyk token
    pub async fn clear_snyk_token(&self, notify: bool) {
        match self.delete_token().await {
            Ok(()) => {
                if notify {
                    self.notifier
                        .show_info("Snyk token has been removed successfully");
                }
            }
            Err(e) => self.notifier.show_error(&format!(
                "Failed to delete Snyk token from Secret Storage, Error: {e}"
            )),
        }
    }

    fn linked_secrets(&self) -> SecretResult<&Arc<dyn SecretStorage>> {
        self.secrets.as_ref().ok_or(SecretStoreError::NotLinked)
    }

    async fn store_token(&self, token: &SecretString) -> SecretResult<()> {
        self.linked_secrets()?.store(SNYK_TOKEN_KEY, token).await
    }

    async fn read_token(&self) -> SecretResult<Option<SecretString>> {
        self.linked_secrets()?.get(SNYK_TOKEN_KEY).await
    }

    async fn delete_token(&self) -> SecretResult<()> {
        self.linked_secrets()?.delete(SNYK_TOKEN_KEY).await
    }
}

// Read-only properties
impl GlobalConfig {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stack_analysis_command(&self) -> &str {
        &self.settings.stack_analysis_command
    }

    pub fn rh_repository_recommendation_notification_command(&self) -> &str {
        &self.settings.rh_repository_recommendation_notification_command
    }

    pub fn utm_source(&self) -> &str {
        &self.settings.utm_source
    }

    pub fn match_manifest_versions(&self) -> bool {
        self.settings.match_manifest_versions
    }

    pub fn vulnerability_alert_severity(&self) -> &AlertSeverity {
        &self.settings.vulnerability_alert_severity
    }

    pub fn rhda_report_file_path(&self) -> &str {
        &self.settings.rhda_report_file_path
    }

    pub fn exhort_mvn_path(&self) -> &str {
        &self.settings.exhort_mvn_path
    }

    pub fn exhort_npm_path(&self) -> &str {
        &self.settings.exhort_npm_path
    }

    pub fn exhort_go_path(&self) -> &str {
        &self.settings.exhort_go_path
    }

    pub fn exhort_python3_path(&self) -> &str {
        &self.settings.exhort_python3_path
    }

    pub fn exhort_pip3_path(&self) -> &str {
        &self.settings.exhort_pip3_path
    }

    pub fn exhort_python_path(&self) -> &str {
        &self.settings.exhort_python_path
    }

    pub fn exhort_pip_path(&self) -> &str {
        &self.settings.exhort_pip_path
    }

    /// Token captured by the last `authorize_rhda`
    pub fn exhort_snyk_token(&self) -> &SecretString {
        &self.exhort_snyk_token
    }

    /// Cached telemetry id, once resolved
    pub fn telemetry_id(&self) -> Option<&str> {
        self.telemetry_id.as_deref()
    }

    /// Currently linked secret store
    pub fn secrets(&self) -> Option<&Arc<dyn SecretStorage>> {
        self.secrets.as_ref()
    }
}

fn empty_token() -> SecretString {
    SecretString::new(String::new())
}
