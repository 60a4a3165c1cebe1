//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Operation invocation:
//!     → retries.rs (run, wait a fixed delay on transient faults, retry)
//!     → faults.rs (classify each failure as transient or not)
//! ```
//!
//! # Design Decisions
//! - Only HTTP request and connection-level failures are retried
//! - Retries assume the caller's operation is idempotent
//! - Timeouts belong to the caller's operation, not to this layer

pub mod faults;
pub mod retries;

pub use faults::TransientFault;
pub use retries::{RetryPolicy, RetryState};
