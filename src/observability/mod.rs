//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! executor + cache produce:
//!     → logging.rs (structured log events, one span per execution)
//!     → metrics.rs (counters, gauges)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Invocation ID flows through every event of one execution
//! - Metrics are cheap (facade calls, no-op without a recorder)

pub mod logging;
pub mod metrics;
