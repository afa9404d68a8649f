use crate::domain::logging::LogLevel;
use crate::domain::plot::PlotResource;

/// Backend address used when nothing overrides it.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// localStorage key overriding the API base.
pub const API_BASE_KEY: &str = "dashboard_api_base";
/// localStorage key overriding the minimum log level.
pub const LOG_LEVEL_KEY: &str = "dashboard_log_level";

/// Dashboard settings, injected at mount instead of hardcoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL the resource paths are appended to (e.g. "http://localhost:5000/api")
    pub api_base: String,

    /// Minimum level written to the browser console
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl DashboardConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Full URL of a plot endpoint: `{api_base}/{resource}`.
    pub fn endpoint_url(&self, resource: PlotResource) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), resource.path())
    }

    /// Apply overrides from a key/value source. Blank or unparsable values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_base) = lookup(API_BASE_KEY) {
            let api_base = api_base.trim();
            if !api_base.is_empty() {
                self.api_base = api_base.to_string();
            }
        }

        if let Some(level) = lookup(LOG_LEVEL_KEY) {
            if let Ok(level) = level.trim().parse::<LogLevel>() {
                self.log_level = level;
            }
        }

        self
    }

    /// Settings for the current page: debug logging on localhost, then
    /// any overrides stored in localStorage.
    pub fn from_environment() -> Self {
        let mut config = Self::default();

        let Some(window) = web_sys::window() else {
            return config;
        };

        if let Ok(hostname) = window.location().hostname() {
            if hostname == "localhost" || hostname == "127.0.0.1" {
                config.log_level = LogLevel::Debug;
            }
        }

        match window.local_storage() {
            Ok(Some(storage)) => config.apply_overrides(|key| storage.get_item(key).ok().flatten()),
            _ => config,
        }
    }
}
