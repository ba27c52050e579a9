//! Synchronous control structures.
//!
//! - [`Either`]: the Disjoint Result, a value that is exactly one of a
//!   failure (`Left`) or a success (`Right`)
//!
//! Everything in this module is pure and total: nothing performs I/O and
//! nothing panics (apart from the explicitly documented `unwrap_*` methods).
//!
//! # Examples
//!
//! ```rust
//! use taskeither::control::{Either, left, right};
//!
//! let parsed: Either<String, i32> = right(21);
//! let doubled = parsed.map(|value| value * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed: Either<String, i32> = left("not a number".to_string());
//! assert_eq!(failed.get_or_else(|| 0), 0);
//! ```

mod either;

pub use either::{Either, left, right};
