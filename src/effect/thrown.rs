//! What the lifting boundary caught.
//!
//! [`TaskEither::try_catch`](super::TaskEither::try_catch) hands every
//! failure of a wrapped operation to its error handler as a [`Thrown`]:
//! either the operation's own `Err` value or the message of a panic raised
//! while starting or polling it.

use std::any::Any;
use std::fmt;

const UNKNOWN_PANIC: &str = "panic with a non-string payload";

/// A failure caught by the lifting boundary.
///
/// # Examples
///
/// ```rust
/// use taskeither::effect::Thrown;
///
/// let rejected: Thrown<&str> = Thrown::Rejected("connection refused");
/// assert_eq!(rejected.to_string(), "operation failed: connection refused");
///
/// let panicked: Thrown<&str> = Thrown::Panicked("index out of bounds".to_string());
/// assert_eq!(panicked.to_string(), "operation panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thrown<X> {
    /// The operation completed with `Err(X)`.
    Rejected(X),
    /// The operation panicked; holds the panic message.
    Panicked(String),
}

impl<X> Thrown<X> {
    /// Builds a `Panicked` value from a payload caught by `catch_unwind`.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| UNKNOWN_PANIC.to_string());
        Self::Panicked(message)
    }

    /// Returns the rejection value, if the operation did not panic.
    pub fn rejected(self) -> Option<X> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }

    /// Returns `true` if the operation panicked.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Transforms the rejection value.
    #[must_use]
    pub fn map<Y, F>(self, function: F) -> Thrown<Y>
    where
        F: FnOnce(X) -> Y,
    {
        match self {
            Self::Rejected(error) => Thrown::Rejected(function(error)),
            Self::Panicked(message) => Thrown::Panicked(message),
        }
    }
}

impl<X: fmt::Display> fmt::Display for Thrown<X> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(error) => write!(formatter, "operation failed: {error}"),
            Self::Panicked(message) => write!(formatter, "operation panicked: {message}"),
        }
    }
}

impl<X: fmt::Debug + fmt::Display> std::error::Error for Thrown<X> {}
