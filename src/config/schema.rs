//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! fall back to defaults for any missing field.

use serde::{Deserialize, Serialize};

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRY: u32 = 3;

/// Default delay between attempts, in seconds.
pub const DEFAULT_DELAY_SECS: u64 = 2;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AccessConfig {
    /// Retry options consumed by the executor.
    pub service_access: ServiceAccessOptions,

    /// Result cache settings.
    pub cache: CacheConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Retry options for the access executor.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceAccessOptions {
    /// Number of retry attempts after the first.
    pub retry: u32,

    /// Seconds to wait between attempts.
    pub delay: u64,
}

impl Default for ServiceAccessOptions {
    fn default() -> Self {
        Self {
            retry: DEFAULT_RETRY,
            delay: DEFAULT_DELAY_SECS,
        }
    }
}

/// Result cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// JSON file the in-memory cache is loaded from and saved to.
    pub persistence_path: Option<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty output for development, JSON for production.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
