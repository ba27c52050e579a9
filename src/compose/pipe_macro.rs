//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(h, g, f)(x)`.
///
/// Combined with [`pointfree`](crate::compose::pointfree), it lays out a
/// `TaskEither` pipeline step by step. Each function is called exactly once,
/// so `FnOnce` is enough.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use taskeither::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, to_string, get_length), 5);
/// ```
///
/// ```
/// use taskeither::compose::pointfree::{chain_either, map_left};
/// use taskeither::control::Either;
/// use taskeither::effect::TaskEither;
/// use taskeither::pipe;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let raw: TaskEither<String, &str> = TaskEither::right("x1");
/// let parsed = pipe!(
///     raw,
///     chain_either(|text: &str| -> Either<String, i32> {
///         text.parse::<i32>().map_err(|_| format!("bad id {text}")).into()
///     }),
///     map_left(|error: String| error.len())
/// );
/// assert_eq!(parsed.invoke().await, Either::Left(9));
/// # });
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn test_pipe_value_only() {
        assert_eq!(pipe!(42), 42);
    }

    #[rstest]
    fn test_pipe_applies_left_to_right() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        assert_eq!(pipe!(3, square, double, add_one), 19);
    }

    #[rstest]
    fn test_pipe_matches_compose() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        assert_eq!(pipe!(10, f, g), crate::compose!(g, f)(10));
    }
}
