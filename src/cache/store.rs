//! Result cache collaborator contract.

use serde_json::Value;
use thiserror::Error;

/// Key/value store the executor reads from and writes to.
///
/// Implementations own eviction and expiry; the executor only calls these two
/// operations. Both must be safe to call concurrently.
pub trait ResultCache: Send + Sync {
    /// Look up a value by exact key.
    fn try_get(&self, key: &str) -> Option<Value>;

    /// Unconditional upsert.
    fn set(&self, key: &str, value: Value);
}

/// Errors raised by cache persistence.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache persistence operations.
pub type CacheResult<T> = Result<T, CacheError>;
