//! Service access library: cached, retried remote calls.

pub mod cache;
pub mod config;
pub mod executor;
pub mod observability;
pub mod resilience;

pub use cache::{MemoryCache, ResultCache};
pub use config::{AccessConfig, ServiceAccessOptions};
pub use executor::{AccessError, AccessResult, ServiceAccessExecutor};
pub use resilience::{RetryPolicy, TransientFault};
