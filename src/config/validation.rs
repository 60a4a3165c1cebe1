//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (retry count, delay)
//! - Check observability and cache settings are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AccessConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::AccessConfig;

/// Upper bound on configured retries.
pub const MAX_RETRY: u32 = 100;

/// Upper bound on the configured delay, in seconds.
pub const MAX_DELAY_SECS: u64 = 3600;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AccessConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.service_access.retry > MAX_RETRY {
        errors.push(ValidationError {
            field: "service_access.retry",
            message: format!("must be at most {}, got {}", MAX_RETRY, config.service_access.retry),
        });
    }

    if config.service_access.delay > MAX_DELAY_SECS {
        errors.push(ValidationError {
            field: "service_access.delay",
            message: format!(
                "must be at most {} seconds, got {}",
                MAX_DELAY_SECS, config.service_access.delay
            ),
        });
    }

    if let Some(path) = &config.cache.persistence_path {
        if path.trim().is_empty() {
            errors.push(ValidationError {
                field: "cache.persistence_path",
                message: "must not be blank".to_string(),
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!(
                "unknown level '{}', expected one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AccessConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_retry_and_delay_are_valid() {
        let mut config = AccessConfig::default();
        config.service_access.retry = 0;
        config.service_access.delay = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AccessConfig::default();
        config.service_access.retry = MAX_RETRY + 1;
        config.service_access.delay = MAX_DELAY_SECS + 1;
        config.cache.persistence_path = Some("  ".to_string());
        config.observability.log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "service_access.retry",
                "service_access.delay",
                "cache.persistence_path",
                "observability.log_level",
            ]
        );
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = AccessConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
