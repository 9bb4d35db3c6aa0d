//! Tests for the logging configuration

use super::*;
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |var| vars.get(var).cloned()
}

#[test]
fn test_for_build_defaults() {
    let config = LoggingConfig::for_build();
    let expected = if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    assert_eq!(config.level, expected);
    assert_eq!(config.format, LogFormat::Text);
    assert!(config.directives.is_none());
    assert!(config.log_directory.is_none());
}

#[test]
fn test_override_without_variables_keeps_config() {
    let config = LoggingConfig::new(LogLevel::Info)
        .override_from(lookup(&[]))
        .unwrap();
    assert_eq!(config, LoggingConfig::new(LogLevel::Info));
}

#[test]
fn test_override_reads_every_variable() {
    let config = LoggingConfig::new(LogLevel::Warn)
        .override_from(lookup(&[
            (LOG_FILTER_VAR, "info,rhda_config::secrets=debug"),
            (LOG_FORMAT_VAR, "JSON"),
            (LOG_DIR_VAR, "/var/log/rhda"),
        ]))
        .unwrap();

    assert_eq!(
        config.directives.as_deref(),
        Some("info,rhda_config::secrets=debug")
    );
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.log_directory, Some(PathBuf::from("/var/log/rhda")));
}

#[test]
fn test_override_ignores_empty_values() {
    let config = LoggingConfig::new(LogLevel::Warn)
        .override_from(lookup(&[(LOG_FILTER_VAR, ""), (LOG_DIR_VAR, "  ")]))
        .unwrap();
    assert!(config.directives.is_none());
    assert!(config.log_directory.is_none());
}

#[test]
fn test_override_rejects_unknown_format() {
    let result =
        LoggingConfig::new(LogLevel::Warn).override_from(lookup(&[(LOG_FORMAT_VAR, "xml")]));
    assert!(matches!(
        result,
        Err(LoggingError::InvalidSetting { var: LOG_FORMAT_VAR, .. })
    ));
}

#[test]
fn test_env_filter_uses_base_level() {
    let filter = build_env_filter(&LoggingConfig::new(LogLevel::Warn)).unwrap();
    assert!(filter.to_string().to_lowercase().contains("warn"));
}

#[test]
fn test_env_filter_prefers_directives() {
    let mut config = LoggingConfig::new(LogLevel::Warn);
    config.directives = Some("rhda_config::facade=debug".to_string());

    let filter = build_env_filter(&config).unwrap().to_string().to_lowercase();
    assert!(filter.contains("rhda_config::facade=debug"));
}

#[test]
fn test_env_filter_rejects_bad_directives() {
    let mut config = LoggingConfig::new(LogLevel::Warn);
    config.directives = Some("rhda_config=notalevel".to_string());

    assert!(matches!(
        build_env_filter(&config),
        Err(LoggingError::InvalidSetting { var: LOG_FILTER_VAR, .. })
    ));
}
