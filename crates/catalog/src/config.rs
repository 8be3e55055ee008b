use std::{env, str::FromStr, time::Duration};

use crate::orchestrator::{CachePolicy, DEFAULT_MAX_SLUG_ATTEMPTS};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds (default: 10)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Drop cached entries on update/delete (default: false)
    pub cache_invalidate_on_write: bool,
    /// Slug probes per create, the base slug included (default: 1,000)
    pub max_slug_attempts: u32,
    /// Per-request deadline in seconds (default: 5)
    pub request_timeout_seconds: u64,
    /// Path to SQLite database file (default: "catalog.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 10)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `CACHE_INVALIDATE_ON_WRITE` - `true`/`1` to invalidate on writes (default: false)
    /// - `MAX_SLUG_ATTEMPTS` - Slug probe bound (default: 1,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 5)
    /// - `SQLITE_PATH` - SQLite database path (default: "catalog.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl_seconds: parsed(&lookup, "CACHE_TTL_SECONDS").unwrap_or(10),
            cache_max_entries: parsed(&lookup, "CACHE_MAX_ENTRIES").unwrap_or(10_000),
            cache_invalidate_on_write: lookup("CACHE_INVALIDATE_ON_WRITE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            max_slug_attempts: parsed(&lookup, "MAX_SLUG_ATTEMPTS")
                .unwrap_or(DEFAULT_MAX_SLUG_ATTEMPTS),
            request_timeout_seconds: parsed(&lookup, "REQUEST_TIMEOUT_SECONDS").unwrap_or(5),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "catalog.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn cache_policy(&self) -> CachePolicy {
        if self.cache_invalidate_on_write {
            CachePolicy::InvalidateOnWrite
        } else {
            CachePolicy::ReadThrough
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment.
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.cache_ttl_seconds, 10);
        assert_eq!(config.cache_max_entries, 10_000);
        assert!(!config.cache_invalidate_on_write);
        assert_eq!(config.max_slug_attempts, 1_000);
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.sqlite_path, "catalog.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "600"),
            ("CACHE_MAX_ENTRIES", "5"),
            ("CACHE_INVALIDATE_ON_WRITE", "true"),
            ("MAX_SLUG_ATTEMPTS", "3"),
            ("REQUEST_TIMEOUT_SECONDS", "30"),
            ("SQLITE_PATH", "/tmp/test.db"),
        ]);

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.cache_max_entries, 5);
        assert_eq!(config.cache_policy(), CachePolicy::InvalidateOnWrite);
        assert_eq!(config.max_slug_attempts, 3);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.sqlite_path, "/tmp/test.db");
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "ten"),
            ("MAX_SLUG_ATTEMPTS", "-1"),
            ("CACHE_INVALIDATE_ON_WRITE", "maybe"),
        ]);

        assert_eq!(config.cache_ttl_seconds, 10);
        assert_eq!(config.max_slug_attempts, 1_000);
        assert_eq!(config.cache_policy(), CachePolicy::ReadThrough);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
