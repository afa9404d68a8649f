use std::collections::HashMap;

use housing_dashboard::domain::logging::LogLevel;
use housing_dashboard::infrastructure::DashboardConfig;
use housing_dashboard::infrastructure::config::{API_BASE_KEY, DEFAULT_API_BASE, LOG_LEVEL_KEY};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults() {
    let config = DashboardConfig::default();
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn overrides_replace_base_and_level() {
    let config = DashboardConfig::default().apply_overrides(lookup(&[
        (API_BASE_KEY, " https://staging.example.com/api "),
        (LOG_LEVEL_KEY, "warn"),
    ]));
    assert_eq!(config.api_base, "https://staging.example.com/api");
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
fn blank_and_invalid_overrides_are_ignored() {
    let config = DashboardConfig::default()
        .with_log_level(LogLevel::Debug)
        .apply_overrides(lookup(&[(API_BASE_KEY, "   "), (LOG_LEVEL_KEY, "verbose")]));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn no_overrides_keeps_config() {
    let config = DashboardConfig::new("http://api.internal").apply_overrides(|_| None);
    assert_eq!(config, DashboardConfig::new("http://api.internal"));
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
    assert_eq!("Trace".parse::<LogLevel>(), Ok(LogLevel::Trace));
}
