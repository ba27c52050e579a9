//! Small combinators used when assembling pipelines.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`always`]: a zero-argument fallback returning a fixed value

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// Mapping a pipeline with `identity` leaves its results unchanged.
///
/// # Examples
///
/// ```
/// use taskeither::compose::identity;
/// use taskeither::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// let composed = compose!(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Handy for replacing a success or failure wholesale, for example
/// `task.map_left(constant("unavailable"))`.
///
/// # Examples
///
/// ```
/// use taskeither::compose::constant;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}

/// Creates a fallback that returns the given value.
///
/// Fits [`TaskEither::get_or_else`](crate::effect::TaskEither::get_or_else),
/// whose fallback takes no argument.
///
/// # Examples
///
/// ```
/// use taskeither::compose::always;
///
/// let fallback = always("error");
/// assert_eq!(fallback(), "error");
/// ```
#[inline]
pub fn always<T: Clone>(value: T) -> impl Fn() -> T + Clone {
    move || value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
        assert_eq!(always_hello(7), "hello");
    }

    #[rstest]
    fn test_always_clones_each_call() {
        let fallback = always(vec![1, 2]);
        assert_eq!(fallback(), vec![1, 2]);
        assert_eq!(fallback(), vec![1, 2]);
    }
}
