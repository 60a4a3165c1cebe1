//! Error type for operations run through the executor.

use thiserror::Error;

use crate::resilience::faults::TransientFault;

/// Ready-made error for remote-call operations.
///
/// Callers may use any error type implementing [`TransientFault`]; this one
/// covers the common HTTP client case.
#[derive(Debug, Error)]
pub enum AccessError {
    /// HTTP request failed (connect, timeout, non-success status, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Network-level failure outside the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    /// Any other failure raised by the operation. Never retried.
    #[error("Operation failed: {0}")]
    Operation(String),
}

impl TransientFault for AccessError {
    fn is_transient(&self) -> bool {
        match self {
            AccessError::Http(e) => e.is_transient(),
            AccessError::Network(e) => e.is_transient(),
            AccessError::Operation(_) => false,
        }
    }
}

/// Result type for operations run through the executor.
pub type AccessResult<T> = Result<T, AccessError>;
