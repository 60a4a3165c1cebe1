//! Access executor: cached, retried invocation of remote calls.
//!
//! # Flow
//! ```text
//! execute(operation, key)
//!     key blank/absent → retry policy → result
//!     key present      → cache hit?  → cached result (operation not invoked)
//!                      → cache miss  → retry policy → write if Some → result
//! ```
//!
//! # Concurrency
//! The executor holds the immutable retry policy and a shared cache handle,
//! so clones can be used from any number of tasks. Concurrent misses on the
//! same key are not collapsed: each invokes the operation and writes, and the
//! last write wins.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::cache::ResultCache;
use crate::config::ServiceAccessOptions;
use crate::observability::metrics::{self, Outcome};
use crate::resilience::{RetryPolicy, TransientFault};

/// Wraps remote calls with fixed-delay retry and optional result caching.
#[derive(Clone)]
pub struct ServiceAccessExecutor {
    cache: Arc<dyn ResultCache>,
    policy: RetryPolicy,
}

impl ServiceAccessExecutor {
    /// Create an executor. Missing options fall back to 3 retries, 2 seconds apart.
    pub fn new(cache: Arc<dyn ResultCache>, options: Option<&ServiceAccessOptions>) -> Self {
        let options = options.copied().unwrap_or_default();
        let policy = RetryPolicy::from_options(&options);

        tracing::debug!(
            retries = policy.retries(),
            delay = ?policy.delay(),
            "Service access executor created"
        );

        Self::with_policy(cache, policy)
    }

    /// Create an executor with an explicit policy.
    pub fn with_policy(cache: Arc<dyn ResultCache>, policy: RetryPolicy) -> Self {
        Self { cache, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run `operation`, consulting the cache first when `cache_key` is non-blank.
    ///
    /// A `None` result is returned to the caller but never cached. The
    /// operation's final error is returned unchanged.
    pub async fn execute<T, E, F, Fut>(&self, operation: F, cache_key: Option<&str>) -> Result<Option<T>, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
        T: Serialize + DeserializeOwned,
        E: TransientFault + fmt::Display,
    {
        let key = cache_key.filter(|k| !k.trim().is_empty());
        let span = tracing::debug_span!(
            "service_access",
            invocation_id = %Uuid::new_v4(),
            cache_key = key.unwrap_or("")
        );

        async move {
            let Some(key) = key else {
                return self.finish(self.policy.execute(operation).await);
            };

            if let Some(cached) = self.get_cached::<T>(key) {
                metrics::record_execution(Outcome::CacheHit);
                return Ok(Some(cached));
            }

            let result = self.policy.execute(operation).await;
            if let Ok(Some(value)) = &result {
                self.set_cached(key, value);
            }
            self.finish(result)
        }
        .instrument(span)
        .await
    }

    fn finish<T, E>(&self, result: Result<T, E>) -> Result<T, E> {
        let outcome = if result.is_ok() { Outcome::Success } else { Outcome::Failure };
        metrics::record_execution(outcome);
        result
    }

    fn get_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let hit = match self.cache.try_get(key) {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value(value) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!(error = %e, "Cached value has unexpected shape, treating as miss");
                    None
                }
            },
        };

        metrics::record_cache_lookup(hit.is_some());
        tracing::debug!(hit = hit.is_some(), "Cache lookup");
        hit
    }

    fn set_cached<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(Value::Null) => {}
            Ok(encoded) => {
                self.cache.set(key, encoded);
                metrics::record_cache_write();
                tracing::debug!("Result cached");
            }
            Err(e) => tracing::warn!(error = %e, "Result not cacheable, skipping cache write"),
        }
    }
}

impl fmt::Debug for ServiceAccessExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccessExecutor")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
