//! Deferred asynchronous effects.
//!
//! - [`Task`]: the Deferred Computation, a re-invocable description of
//!   asynchronous work
//! - [`TaskEither`]: the Deferred Disjoint Result, a `Task` resolving to an
//!   [`Either`](crate::control::Either)
//! - [`Thrown`]: what the lifting boundary caught from a wrapped operation
//!
//! With the `policy` feature, [`policy`] adds timeouts and retries backed by
//! the `tokio` time driver.
//!
//! # Examples
//!
//! ```rust
//! use taskeither::control::Either;
//! use taskeither::effect::TaskEither;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let task: TaskEither<String, &str> = TaskEither::right("foo");
//! let shouted = task.map(str::to_uppercase).get_or_else(|| "error".to_string());
//! assert_eq!(shouted.invoke().await, "FOO");
//! # });
//! ```

mod task;
mod task_either;
mod thrown;

#[cfg(feature = "policy")]
pub mod policy;

pub use task::Task;
pub use task_either::TaskEither;
pub use thrown::Thrown;

#[cfg(feature = "policy")]
pub use policy::{ConfigError, PipelineConfig, RetryPolicy, TimeoutError};
