//! Named, reusable pipelines.
//!
//! A [`Service`] is a function from an input to a [`TaskEither`]. Services
//! are built by lifting a transport call once and composing steps around it.
//! The result is an ordinary value that can be stored, shared across threads
//! and called any number of times.
//!
//! # Examples
//!
//! ```
//! use taskeither::control::Either;
//! use taskeither::effect::TaskEither;
//! use taskeither::service::{Service, ServiceError, service};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let fetch_balance: Service<u32, ServiceError, i64> = service(|account: u32| {
//!     TaskEither::try_catch(
//!         move || async move {
//!             if account == 0 { Err("no such account") } else { Ok(i64::from(account) * 100) }
//!         },
//!         ServiceError::from_thrown,
//!     )
//! });
//!
//! assert_eq!(fetch_balance(4).invoke().await, Either::Right(400));
//! assert!(fetch_balance(0).invoke().await.is_left());
//! # });
//! ```

mod error;
#[cfg(feature = "tracing")]
mod instrument;

use std::sync::Arc;

use crate::effect::TaskEither;

pub use error::{ErrorKind, ServiceError};

/// A shareable function from an input to a pipeline.
pub type Service<I, E, A> = Arc<dyn Fn(I) -> TaskEither<E, A> + Send + Sync>;

/// Names a composed pipeline as a [`Service`].
pub fn service<I, E, A, F>(function: F) -> Service<I, E, A>
where
    F: Fn(I) -> TaskEither<E, A> + Send + Sync + 'static,
{
    Arc::new(function)
}
