//! Retry logic.
//!
//! # Responsibilities
//! - Determine if a failure is retryable (transient faults only)
//! - Execute retries with a fixed delay between attempts
//! - Enforce the retry budget (additional attempts after the first)
//!
//! # State Transitions
//! ```text
//! Idle → Attempting: invocation starts
//! Attempting → Succeeded: operation returns Ok
//! Attempting → WaitingBeforeRetry: transient fault, budget remaining
//! WaitingBeforeRetry → Attempting: after the fixed delay
//! Attempting → Failed: non-transient fault, or budget exhausted
//! ```
//!
//! # Design Decisions
//! - The delay is constant; there is no exponential growth and no jitter
//! - The last failure is returned as-is, never wrapped
//! - Waiting suspends only the calling future

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::config::ServiceAccessOptions;
use crate::observability::metrics;
use crate::resilience::faults::TransientFault;

/// Lifecycle of one retried invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    Idle,
    Attempting,
    WaitingBeforeRetry,
    Succeeded,
    Failed,
}

impl fmt::Display for RetryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RetryState::Idle => "idle",
            RetryState::Attempting => "attempting",
            RetryState::WaitingBeforeRetry => "waiting_before_retry",
            RetryState::Succeeded => "succeeded",
            RetryState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Immutable fixed-delay retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    retries: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_options(&ServiceAccessOptions::default())
    }
}

impl RetryPolicy {
    /// Create a policy allowing `retries` additional attempts, `delay` apart.
    pub fn new(retries: u32, delay: Duration) -> Self {
        Self { retries, delay }
    }

    /// Build from configured options (`delay` is in seconds).
    pub fn from_options(options: &ServiceAccessOptions) -> Self {
        Self::new(options.retry, Duration::from_secs(options.delay))
    }

    /// Number of retries after the first attempt.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Fixed wait between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Total attempts the policy permits.
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Decide the state after a failed attempt (`attempt` is 1-based).
    pub fn next_state<E: TransientFault>(&self, err: &E, attempt: u32) -> RetryState {
        if err.is_transient() && attempt <= self.retries {
            RetryState::WaitingBeforeRetry
        } else {
            RetryState::Failed
        }
    }

    /// Run `operation` until it succeeds, fails with a non-transient error,
    /// or the retry budget is spent.
    pub async fn execute<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: TransientFault + fmt::Display,
    {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            tracing::trace!(attempt, state = %RetryState::Attempting, "Invoking operation");

            let err = match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::debug!(attempt, "Operation succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) => err,
            };

            match self.next_state(&err, attempt) {
                RetryState::WaitingBeforeRetry => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts(),
                        delay = ?self.delay,
                        error = %err,
                        "Transient fault, retrying"
                    );
                    metrics::record_retry(attempt);
                    sleep(self.delay).await;
                }
                _ => {
                    if err.is_transient() {
                        tracing::warn!(attempts = attempt, error = %err, "Retry budget exhausted");
                    } else {
                        tracing::debug!(attempt, error = %err, "Non-transient failure, not retrying");
                    }
                    return Err(err);
                }
            }
        }
    }
}
