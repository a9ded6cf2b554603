//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Which backend holds pending verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    /// Process-local map, lost on restart
    Memory,
    /// Shared Redis instance
    Redis,
}

impl std::str::FromStr for CacheType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(CacheType::Memory),
            "redis" => Ok(CacheType::Redis),
            _ => Err(format!("Unknown cache type: {}", s)),
        }
    }
}

/// Cache configuration for the verification store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Backend type
    pub cache_type: CacheType,

    /// Redis connection URL (redis backend only)
    pub url: String,

    /// Prefix applied to every Redis key
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Upper bound on in-memory entries (memory backend only)
    #[serde(default)]
    pub max_entries: Option<usize>,

    /// Seconds between sweeps of expired in-memory entries
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: CacheType::Memory,
            url: String::from("redis://localhost:6379"),
            key_prefix: None,
            max_entries: None,
            cleanup_interval: default_cleanup_interval(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_type: std::env::var("VERIFICATION_STORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_type),
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").ok(),
            max_entries: std::env::var("VERIFICATION_STORE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok()),
            cleanup_interval: std::env::var("VERIFICATION_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Create a redis-backed configuration with URL
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            cache_type: CacheType::Redis,
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_cleanup_interval() -> u64 {
    60
}
