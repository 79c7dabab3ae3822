use std::{env, time::Duration};

use craftcatalog_core::cache::InvalidationStrategy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Whether reads go through the cache at all (default: true)
    pub cache_enabled: bool,
    /// How writes evict cached entries (default: targeted)
    pub cache_invalidation: InvalidationStrategy,
    /// Path to SQLite database file (default: "craftcatalog.db")
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `CACHE_ENABLED` - `true`/`false` (default: true)
    /// - `CACHE_INVALIDATION` - `targeted` or `flush` (default: targeted)
    /// - `SQLITE_PATH` - SQLite database path, or `:memory:` (default: "craftcatalog.db")
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(10_000),
            cache_enabled: lookup("CACHE_ENABLED")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            cache_invalidation: lookup("CACHE_INVALIDATION")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "craftcatalog.db".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
