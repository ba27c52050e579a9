//! The shared failure taxonomy for composed services.
//!
//! Each step of a pipeline keeps its own error type. Where steps meet, their
//! errors are mapped into [`ServiceError`] with `map_left`, so callers of a
//! composed service can match on a single, closed set of kinds.

use std::fmt;

use thiserror::Error;

use crate::effect::{Thrown, TimeoutError};

// =============================================================================
// ErrorKind
// =============================================================================

/// The kind of a [`ServiceError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The remote call could not be completed.
    Transport,
    /// A response did not have the expected shape.
    Decode,
    /// The caller is not allowed to make the request.
    Authentication,
    /// The request violated a business rule.
    DomainRule,
    /// The call did not finish in time.
    Timeout,
}

impl ErrorKind {
    /// Returns `true` for kinds worth retrying.
    ///
    /// Transport failures and timeouts may succeed on a second try. The
    /// other kinds would fail again with the same input.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Transport | Self::Timeout)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::Decode => "decode",
            Self::Authentication => "authentication",
            Self::DomainRule => "domain rule",
            Self::Timeout => "timeout",
        };
        formatter.write_str(name)
    }
}

// =============================================================================
// ServiceError
// =============================================================================

/// A failure of a composed service.
///
/// # Examples
///
/// ```
/// use taskeither::service::{ErrorKind, ServiceError};
///
/// let error = ServiceError::decode("missing field `recordId`");
/// assert_eq!(error.kind(), ErrorKind::Decode);
/// assert_eq!(error.to_string(), "decode error: missing field `recordId`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The remote call failed or panicked.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The caller lacks the required credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A business rule rejected the request.
    #[error("rule violated: {0}")]
    DomainRule(String),

    /// The call exceeded its deadline.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}

impl ServiceError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a domain rule violation.
    pub fn domain_rule(message: impl Into<String>) -> Self {
        Self::DomainRule(message.into())
    }

    /// Maps whatever a lifted transport call threw to a `Transport` error.
    ///
    /// Meant as the error handler of
    /// [`TaskEither::try_catch`](crate::effect::TaskEither::try_catch).
    ///
    /// # Examples
    ///
    /// ```
    /// use taskeither::control::Either;
    /// use taskeither::effect::TaskEither;
    /// use taskeither::service::ServiceError;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let call: TaskEither<ServiceError, String> =
    ///     TaskEither::try_catch(|| async { Err::<String, _>("connection reset") }, ServiceError::from_thrown);
    ///
    /// assert_eq!(
    ///     call.invoke().await,
    ///     Either::Left(ServiceError::transport("connection reset"))
    /// );
    /// # });
    /// ```
    pub fn from_thrown<X: fmt::Display>(thrown: Thrown<X>) -> Self {
        match thrown {
            Thrown::Rejected(error) => Self::Transport(error.to_string()),
            Thrown::Panicked(message) => Self::Transport(format!("panicked: {message}")),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::DomainRule(_) => ErrorKind::DomainRule,
            Self::Timeout(_) => ErrorKind::Timeout,
        }
    }

    /// Returns `true` if retrying may help.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.kind().is_transient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    #[case(ServiceError::transport("reset"), ErrorKind::Transport, true)]
    #[case(ServiceError::decode("bad json"), ErrorKind::Decode, false)]
    #[case(ServiceError::authentication("no token"), ErrorKind::Authentication, false)]
    #[case(ServiceError::domain_rule("limit exceeded"), ErrorKind::DomainRule, false)]
    #[case(
        ServiceError::from(TimeoutError { duration: Duration::from_secs(1) }),
        ErrorKind::Timeout,
        true
    )]
    fn kind_and_transience(
        #[case] error: ServiceError,
        #[case] kind: ErrorKind,
        #[case] transient: bool,
    ) {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.is_transient(), transient);
    }

    #[rstest]
    fn timeout_display_is_transparent() {
        let error = ServiceError::from(TimeoutError {
            duration: Duration::from_millis(20),
        });
        assert_eq!(error.to_string(), "operation timed out after 20ms");
    }

    #[rstest]
    fn panics_are_reported_as_transport_errors() {
        let error = ServiceError::from_thrown::<String>(Thrown::Panicked("boom".to_string()));
        assert_eq!(error, ServiceError::transport("panicked: boom"));
    }

    #[rstest]
    fn kind_display() {
        assert_eq!(ErrorKind::DomainRule.to_string(), "domain rule");
    }
}
