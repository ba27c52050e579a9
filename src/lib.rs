//! # taskeither
//!
//! Lazy, error-aware asynchronous effects for composing fallible services
//! out of small, pure building blocks.
//!
//! ## Overview
//!
//! A "service" built with this crate is a composed function, not a stateful
//! object. Every step (fetch, decode, validate, reshape) is a deferred value
//! that does nothing until it is invoked at the edge of the program:
//!
//! - **Disjoint Result**: [`Either`](control::Either), exactly one of
//!   `Left` (failure) or `Right` (success)
//! - **Deferred Computation**: [`Task`](effect::Task), a re-invocable
//!   asynchronous thunk
//! - **Deferred Disjoint Result**: [`TaskEither`](effect::TaskEither), a
//!   `Task` that resolves to an `Either` and never panics once lifted
//! - **Pipeline Assembly**: `pipe!`, `pipe_task!` and point-free combinators
//! - **Policies**: timeouts and retries layered on top of the core
//!
//! ## Feature Flags
//!
//! - `control`: the `Either` type
//! - `effect`: `Task`, `TaskEither` and the lifting boundary
//! - `compose`: composition macros and point-free combinators
//! - `policy`: timeout/retry combinators and `PipelineConfig`
//! - `service`: the `Service` alias and the `ServiceError` taxonomy
//! - `serde`: serialization for `Either` and policy configuration
//! - `tracing`: opt-in instrumentation of service invocations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use taskeither::prelude::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let parse = TaskEither::try_catch(
//!     || async { "42".parse::<i32>() },
//!     |thrown| format!("parse failed: {thrown}"),
//! );
//! let doubled = parse.map(|value| value * 2);
//!
//! assert_eq!(doubled.invoke().await, Either::Right(84));
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the effect types, `Either`, and the composition macros.
///
/// # Usage
///
/// ```rust
/// use taskeither::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::{compose, identity, pipe, pipe_task};

    #[cfg(feature = "service")]
    pub use crate::service::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "service")]
pub mod service;
