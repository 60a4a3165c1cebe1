//! Metrics collection.
//!
//! # Metrics
//! - `service_access_cache_lookups_total` (counter): lookups by result (hit, miss)
//! - `service_access_cache_writes_total` (counter): results written to cache
//! - `service_access_cache_entries` (gauge): entries held by the in-memory cache
//! - `service_access_retries_total` (counter): retries after a transient fault
//! - `service_access_executions_total` (counter): executions by outcome
//!
//! # Design Decisions
//! - Emits through the `metrics` facade; the host application installs a recorder
//! - Without a recorder every call is a no-op

use metrics::{counter, gauge};

/// Outcome label for a finished execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    CacheHit,
    Success,
    Failure,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::CacheHit => "cache_hit",
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

pub fn record_cache_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!("service_access_cache_lookups_total", "result" => result).increment(1);
}

pub fn record_cache_write() {
    counter!("service_access_cache_writes_total").increment(1);
}

pub fn record_cache_size(entries: usize) {
    gauge!("service_access_cache_entries").set(entries as f64);
}

pub fn record_retry(attempt: u32) {
    counter!("service_access_retries_total", "attempt" => attempt.to_string()).increment(1);
}

pub fn record_execution(outcome: Outcome) {
    counter!("service_access_executions_total", "outcome" => outcome.as_str()).increment(1);
}
