//! Either type - the Disjoint Result.
//!
//! `Either<E, A>` is either a `Left(E)` (failure) or a `Right(A)` (success).
//! Both payloads are arbitrary and independently typed; `E` is not assumed
//! to be an error object.
//!
//! Operations address one side without forcing a decision about which side
//! is present. The only sanctioned ways to leave `Either` for a plain value
//! are [`Either::fold`] and [`Either::get_or_else`].
//!
//! # Examples
//!
//! ```rust
//! use taskeither::control::Either;
//!
//! let age: Either<String, u32> = Either::from_predicate(
//!     17,
//!     |age| *age >= 18,
//!     |age| format!("{age} is under age"),
//! );
//!
//! let message = age.fold(|reason| reason, |age| format!("welcome, {age}"));
//! assert_eq!(message, "17 is under age");
//! ```

use std::fmt;

/// A value that is exactly one of a failure or a success.
///
/// `Left` holds the failure payload and `Right` the success payload.
/// There is no "both" and no "neither" state.
///
/// # Type Parameters
///
/// * `E` - The failure payload
/// * `A` - The success payload
///
/// # Examples
///
/// ```rust
/// use taskeither::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, A> {
    /// The failure variant.
    Left(E),
    /// The success variant.
    Right(A),
}

/// Builds a failure.
///
/// # Examples
///
/// ```rust
/// use taskeither::control::{Either, left};
///
/// let value: Either<&str, i32> = left("boom");
/// assert!(value.is_left());
/// ```
#[inline]
pub const fn left<E, A>(error: E) -> Either<E, A> {
    Either::Left(error)
}

/// Builds a success.
///
/// # Examples
///
/// ```rust
/// use taskeither::control::{Either, right};
///
/// let value: Either<&str, i32> = right(5);
/// assert!(value.is_right());
/// ```
#[inline]
pub const fn right<E, A>(value: A) -> Either<E, A> {
    Either::Right(value)
}

impl<E, A> Either<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns `Right(value)` if `predicate` holds, otherwise
    /// `Left(on_fail(value))`.
    ///
    /// This is how domain rules enter the failure channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let positive = |n: i32| Either::from_predicate(n, |n| *n > 0, |n| format!("{n} <= 0"));
    /// assert_eq!(positive(3), Either::Right(3));
    /// assert_eq!(positive(-1), Either::Left("-1 <= 0".to_string()));
    /// ```
    #[inline]
    pub fn from_predicate<P, F>(value: A, predicate: P, on_fail: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
    {
        if predicate(&value) {
            Self::Right(value)
        } else {
            Self::Left(on_fail(value))
        }
    }

    /// Converts an `Option`, producing the failure lazily on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let found: Either<&str, i32> = Either::from_option(Some(1), || "missing");
    /// assert_eq!(found, Either::Right(1));
    ///
    /// let missing: Either<&str, i32> = Either::from_option(None, || "missing");
    /// assert_eq!(missing, Either::Left("missing"));
    /// ```
    #[inline]
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        option.map_or_else(|| Self::Left(on_none()), Self::Right)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the failure payload, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.get_left(), Some(42));
    /// ```
    #[inline]
    pub fn get_left(self) -> Option<E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns the success payload, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("ok".to_string());
    /// assert_eq!(value.get_right(), Some("ok".to_string()));
    /// ```
    #[inline]
    pub fn get_right(self) -> Option<A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a success; a failure passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.map(|s| s.len()), Either::Right(5));
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a failure; a success passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.map_left(|code| format!("E{code}")), Either::Left("E42".to_string()));
    /// ```
    #[inline]
    pub fn map_left<E2, G>(self, function: G) -> Either<E2, A>
    where
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies exactly one of two functions depending on the variant.
    ///
    /// Equivalent to `map_left(left_function).map(right_function)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<E2, B, G, F>(self, left_function: G, right_function: F) -> Either<E2, B>
    where
        G: FnOnce(E) -> E2,
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(left_function(error)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// The first failure wins; `function` is not called on `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let half = |n: i32| {
    ///     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
    /// };
    ///
    /// assert_eq!(Either::Right(8).flat_map(half).flat_map(half), Either::Right(2));
    /// assert_eq!(Either::Right(6).flat_map(half).flat_map(half), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Recovers from a failure with a computation that may itself fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let cached: Either<&str, i32> = Either::Left("miss");
    /// let value: Either<String, i32> = cached.or_else(|_| Either::Right(0));
    /// assert_eq!(value, Either::Right(0));
    /// ```
    #[inline]
    pub fn or_else<E2, G>(self, function: G) -> Either<E2, A>
    where
        G: FnOnce(E) -> Either<E2, A>,
    {
        match self {
            Self::Left(error) => function(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either`; exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, G, F>(self, on_left: G, on_right: F) -> T
    where
        G: FnOnce(E) -> T,
        F: FnOnce(A) -> T,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Returns the success, or evaluates `fallback` on failure.
    ///
    /// `fallback` is not called at all for a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let found: Either<&str, &str> = Either::Right("FOO");
    /// assert_eq!(found.get_or_else(|| "error"), "FOO");
    ///
    /// let missing: Either<&str, &str> = Either::Left("x");
    /// assert_eq!(missing.get_or_else(|| "error"), "error");
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Left(_) => fallback(),
            Self::Right(value) => value,
        }
    }

    /// Swaps the two sides.
    #[inline]
    pub fn swap(self) -> Either<A, E> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => formatter.debug_tuple("Left").field(error).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Either<E, A> {
    /// `Ok(a)` becomes `Right(a)` and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    ///
    /// let either: Either<String, i32> = Ok::<_, String>(42).into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}
