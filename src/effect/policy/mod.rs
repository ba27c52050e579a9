//! Timeouts and retries for `TaskEither` pipelines.
//!
//! These combinators sit outside the core: a timeout is a race between the
//! wrapped invocation and a timer whose loss resolves to `Left`, and a retry
//! re-invokes the wrapped pipeline. Both need a running `tokio` runtime with
//! the time driver enabled.

mod config;

use std::sync::Arc;
use std::time::Duration;

use crate::control::Either;
use crate::effect::TaskEither;

pub use config::{ConfigError, PipelineConfig};

// =============================================================================
// Timeout Error Type
// =============================================================================

/// Error type representing a timeout.
///
/// # Examples
///
/// ```rust
/// use taskeither::effect::TimeoutError;
/// use std::time::Duration;
///
/// let error = TimeoutError { duration: Duration::from_millis(250) };
/// assert_eq!(error.to_string(), "operation timed out after 250ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError {
    /// The timeout duration that was exceeded.
    pub duration: Duration,
}

impl std::fmt::Display for TimeoutError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "operation timed out after {:?}", self.duration)
    }
}

impl std::error::Error for TimeoutError {}

// =============================================================================
// Retry Policy
// =============================================================================

/// How often and how patiently a failed pipeline is re-invoked.
///
/// Before retry `n` (the `n + 1`-th attempt) the delay is
/// `initial_delay * 2^(n - 1)`, capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Zero is treated as one.
    pub max_attempts: usize,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Default delay before the first retry.
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(100);
    /// Default upper bound for a single delay.
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

    /// A policy that makes a single attempt.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Self::DEFAULT_INITIAL_DELAY,
            max_delay: Self::DEFAULT_MAX_DELAY,
        }
    }

    /// A policy with `max_attempts` attempts and exponential backoff starting
    /// at `initial_delay`.
    #[must_use]
    pub const fn exponential(max_attempts: usize, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Self::DEFAULT_MAX_DELAY,
        }
    }

    /// Replaces the delay cap.
    #[must_use]
    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// The number of attempts actually made.
    #[must_use]
    pub const fn effective_attempts(&self) -> usize {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }

    /// The delay to wait before the given 1-based retry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::effect::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::exponential(5, Duration::from_millis(100))
    ///     .with_max_delay(Duration::from_millis(300));
    /// assert_eq!(policy.delay_before_retry(1), Duration::from_millis(100));
    /// assert_eq!(policy.delay_before_retry(2), Duration::from_millis(200));
    /// assert_eq!(policy.delay_before_retry(3), Duration::from_millis(300));
    /// ```
    #[must_use]
    pub fn delay_before_retry(&self, retry: usize) -> Duration {
        let exponent = u32::try_from(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        let multiplier = 2u32.saturating_pow(exponent);
        self.initial_delay
            .saturating_mul(multiplier)
            .min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

// =============================================================================
// TaskEither Extensions
// =============================================================================

impl<E: Send + 'static, A: Send + 'static> TaskEither<E, A> {
    /// Resolves to `Left(on_timeout(..))` if an invocation does not finish
    /// within `duration`.
    ///
    /// The losing invocation is dropped, which cancels it at its next await
    /// point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    /// use taskeither::effect::TaskEither;
    /// use std::time::Duration;
    ///
    /// # tokio::runtime::Builder::new_current_thread().enable_time().start_paused(true)
    /// #     .build().unwrap().block_on(async {
    /// let slow: TaskEither<String, i32> = TaskEither::new(|| async {
    ///     tokio::time::sleep(Duration::from_secs(5)).await;
    ///     Either::Right(1)
    /// });
    ///
    /// let bounded = slow.timeout(Duration::from_millis(100), |error| error.to_string());
    /// assert_eq!(
    ///     bounded.invoke().await,
    ///     Either::Left("operation timed out after 100ms".to_string())
    /// );
    /// # });
    /// ```
    #[must_use]
    pub fn timeout<H>(self, duration: Duration, on_timeout: H) -> Self
    where
        H: Fn(TimeoutError) -> E + Send + Sync + 'static,
    {
        let on_timeout = Arc::new(on_timeout);
        Self::new(move || {
            let pending = self.invoke();
            let on_timeout = Arc::clone(&on_timeout);
            async move {
                match tokio::time::timeout(duration, pending).await {
                    Ok(either) => either,
                    Err(_) => Either::Left(on_timeout(TimeoutError { duration })),
                }
            }
        })
    }

    /// Re-invokes the pipeline after every failure, as allowed by `policy`.
    ///
    /// Returns the first `Right`, or the last `Left` once the attempts are
    /// exhausted.
    #[must_use]
    pub fn retry(self, policy: RetryPolicy) -> Self {
        self.retry_if(policy, |_| true)
    }

    /// Like [`retry`](Self::retry), but only failures accepted by
    /// `should_retry` are retried. Other failures are returned at once.
    #[must_use]
    pub fn retry_if<P>(self, policy: RetryPolicy, should_retry: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        let should_retry = Arc::new(should_retry);
        let attempts = policy.effective_attempts();
        Self::new(move || {
            let pipeline = self.clone();
            let should_retry = Arc::clone(&should_retry);
            async move {
                let mut attempt = 1;
                loop {
                    let error = match pipeline.invoke().await {
                        Either::Right(value) => return Either::Right(value),
                        Either::Left(error) => error,
                    };
                    if attempt >= attempts || !should_retry(&error) {
                        return Either::Left(error);
                    }
                    tokio::time::sleep(policy.delay_before_retry(attempt)).await;
                    attempt += 1;
                }
            }
        })
    }

    /// Applies `config`: a per-attempt timeout (if any), then retries.
    #[must_use]
    pub fn with_config<H>(self, config: &PipelineConfig, on_timeout: H) -> Self
    where
        H: Fn(TimeoutError) -> E + Send + Sync + 'static,
    {
        let bounded = match config.timeout {
            Some(duration) => self.timeout(duration, on_timeout),
            None => self,
        };
        bounded.retry(config.retry)
    }
}
