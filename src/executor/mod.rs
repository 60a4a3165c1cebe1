//! Access executor subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → access.rs (cache lookup by key)
//!     → resilience::retries (invoke operation, retry transient faults)
//!     → access.rs (cache write on success)
//!     → caller
//! ```
//!
//! # Design Decisions
//! - The cache is injected at construction, never global
//! - Nullable results are `Option<T>`; `None` is never cached
//! - Failures reach the caller exactly as the operation produced them

pub mod access;
pub mod error;

pub use access::ServiceAccessExecutor;
pub use error::{AccessError, AccessResult};
