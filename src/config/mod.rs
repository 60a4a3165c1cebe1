//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AccessConfig (validated, immutable)
//!     → ServiceAccessOptions handed to the executor at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a new executor picks up new options
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AccessConfig, CacheConfig, LogFormat, ObservabilityConfig, ServiceAccessOptions};
