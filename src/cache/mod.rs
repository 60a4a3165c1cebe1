//! Result cache.
//!
//! `store.rs` defines the contract the executor depends on; `memory.rs`
//! provides the default DashMap-backed implementation.

pub mod memory;
pub mod store;

pub use memory::MemoryCache;
pub use store::{CacheError, CacheResult, ResultCache};
