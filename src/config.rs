//! Configuration Module
//!
//! Handles loading the cache header settings from environment variables.

use std::env;
use std::path::PathBuf;

/// Default freshness lifetime in seconds (one hour)
pub const DEFAULT_MAX_AGE: u64 = 3600;

/// Cache header configuration.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Skip the Last-Modified / ETag validation stage entirely
    pub disable_validation: bool,
    /// Skip the Cache-Control / Expires freshness stage entirely
    pub disable_freshness: bool,
    /// Seconds a browser may serve its copy without revalidating
    pub max_age: u64,
    /// Same as `max_age`, for shared (proxy) caches
    pub shared_max_age: u64,
    /// HTTP server port (binary only)
    pub server_port: u16,
    /// File whose modification time drives the validators (binary only)
    pub last_modified_file: Option<PathBuf>,
    /// Fixed Unix timestamp driving the validators (binary only)
    pub last_modified_timestamp: Option<i64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DISABLE_LAST_MODIFIED` - Disable the validation stage (default: false)
    /// - `DISABLE_CACHE_CONTROL` - Disable the freshness stage (default: false)
    /// - `CACHE_MAX_AGE` - max-age in seconds (default: 3600)
    /// - `CACHE_SHARED_MAX_AGE` - s-maxage in seconds (default: `CACHE_MAX_AGE`)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LAST_MODIFIED_FILE` - File whose mtime is the last-modified time
    /// - `LAST_MODIFIED_TIMESTAMP` - Fixed last-modified Unix timestamp
    pub fn from_env() -> Self {
        let max_age = parse_var("CACHE_MAX_AGE").unwrap_or(DEFAULT_MAX_AGE);

        Self {
            disable_validation: flag_var("DISABLE_LAST_MODIFIED"),
            disable_freshness: flag_var("DISABLE_CACHE_CONTROL"),
            max_age,
            shared_max_age: parse_var("CACHE_SHARED_MAX_AGE").unwrap_or(max_age),
            server_port: parse_var("SERVER_PORT").unwrap_or(3000),
            last_modified_file: env::var_os("LAST_MODIFIED_FILE").map(PathBuf::from),
            last_modified_timestamp: parse_var("LAST_MODIFIED_TIMESTAMP"),
        }
    }

    /// Sets max-age and s-maxage together.
    pub fn with_max_age(mut self, max_age: u64, shared_max_age: u64) -> Self {
        self.max_age = max_age;
        self.shared_max_age = shared_max_age;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disable_validation: false,
            disable_freshness: false,
            max_age: DEFAULT_MAX_AGE,
            shared_max_age: DEFAULT_MAX_AGE,
            server_port: 3000,
            last_modified_file: None,
            last_modified_timestamp: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn flag_var(name: &str) -> bool {
    env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
