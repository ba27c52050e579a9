//! Pipeline assembly.
//!
//! - [`compose!`]: compose functions right-to-left
//! - [`pipe!`]: apply functions left-to-right
//! - [`pipe_task!`]: thread a `TaskEither` through its combinators
//! - [`pointfree`]: the combinators as free functions, for use with the
//!   macros above
//! - [`identity`], [`constant`], [`always`]: small helpers
//!
//! # Examples
//!
//! ```
//! use taskeither::compose::{always, pointfree};
//! use taskeither::effect::TaskEither;
//! use taskeither::pipe;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let found: TaskEither<String, &str> = TaskEither::right("foo");
//! let missing: TaskEither<String, &str> = TaskEither::left("404".to_string());
//!
//! let shout = |task: TaskEither<String, &'static str>| {
//!     pipe!(task, pointfree::map(str::to_uppercase), pointfree::get_or_else(always("error".to_string())))
//! };
//!
//! assert_eq!(shout(found).invoke().await, "FOO");
//! assert_eq!(shout(missing).invoke().await, "error");
//! # });
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe**: `pipe!(x, f, g) == compose!(g, f)(x)`

mod compose_macro;
mod pipe_macro;
mod pipe_task_macro;
pub mod pointfree;
mod utils;

pub use utils::{always, constant, identity};

pub use crate::compose;
pub use crate::pipe;
pub use crate::pipe_task;
