//! Configuration Module
//!
//! Loads cache limits from environment variables.

use std::env;

use serde::Serialize;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    /// Ceiling for the summed size of all stored entries
    pub max_size: u64,
    /// Interval in seconds between background trim runs
    pub trim_interval: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Size ceiling (default: 1000)
    /// - `CACHE_TRIM_INTERVAL` - Trim frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_size: parse_var("CACHE_MAX_SIZE").unwrap_or(defaults.max_size),
            trim_interval: parse_var("CACHE_TRIM_INTERVAL").unwrap_or(defaults.trim_interval),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            trim_interval: 1,
        }
    }
}

fn parse_var(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.trim_interval, 1);
    }

    // Only test in the crate that mutates these env vars
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_MAX_SIZE");
        env::remove_var("CACHE_TRIM_INTERVAL");
        assert_eq!(CacheConfig::from_env(), CacheConfig::default());

        env::set_var("CACHE_MAX_SIZE", "64");
        env::set_var("CACHE_TRIM_INTERVAL", "not-a-number");
        let config = CacheConfig::from_env();
        assert_eq!(config.max_size, 64);
        assert_eq!(config.trim_interval, 1);

        env::remove_var("CACHE_MAX_SIZE");
        env::remove_var("CACHE_TRIM_INTERVAL");
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(CacheConfig::default()).unwrap();
        assert_eq!(json["max_size"], 1000);
        assert_eq!(json["trim_interval"], 1);
    }
}
