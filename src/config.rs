//! Application Configuration
//!
//! Build-time settings baked in through environment variables, with defaults
//! suitable for a local backend.

use std::time::Duration;

/// Backend base URL used when `SWEET_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Minimum time the route guard shows its checking screen
pub const DEFAULT_GUARD_MIN_MS: u64 = 800;

/// Storage key holding the serialized session record
pub const SESSION_STORAGE_KEY: &str = "sweetData";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base: String,
    /// Minimum loading duration for protected navigations (zero disables it)
    pub guard_min_loading: Duration,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            guard_min_loading: Duration::from_millis(DEFAULT_GUARD_MIN_MS),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SWEET_API_BASE"),
            option_env!("SWEET_GUARD_MIN_MS"),
            option_env!("SWEET_LOG_LEVEL"),
        )
    }

    /// Build config from optional raw values; unparseable values fall back to defaults
    pub fn from_values(api_base: Option<&str>, guard_min_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let guard_min_loading = guard_min_ms
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.guard_min_loading);

        let log_level = log_level
            .and_then(|s| s.trim().parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);

        Self { api_base, guard_min_loading, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.guard_min_loading, Duration::from_millis(800));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://shop.example.com/"), Some("0"), Some("debug"));
        assert_eq!(config.api_base, "https://shop.example.com");
        assert_eq!(config.guard_min_loading, Duration::ZERO);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("soon"), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
