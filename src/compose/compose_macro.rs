//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// In this crate it is mostly used to extend a service with point-free
/// steps: `compose!(pointfree::map(f), fetch)` is a new service that calls
/// `fetch` and maps its result.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `move |x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// The result is `Fn` when every part is `Fn`, so a composed service can be
/// called any number of times.
///
/// # Examples
///
/// ```
/// use taskeither::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// Extending a service:
///
/// ```
/// use taskeither::compose;
/// use taskeither::compose::pointfree;
/// use taskeither::control::Either;
/// use taskeither::effect::TaskEither;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let fetch_name = |id: u32| TaskEither::<String, String>::right(format!("user-{id}"));
/// let fetch_shouted_name = compose!(pointfree::map(|name: String| name.to_uppercase()), fetch_name);
///
/// assert_eq!(fetch_shouted_name(7).invoke().await, Either::Right("USER-7".to_string()));
/// # });
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;
    use rstest::rstest;

    #[rstest]
    fn test_compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[rstest]
    fn test_compose_three() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        let composed = compose!(add_one, double, square);
        assert_eq!(composed(3), 19);
    }

    #[rstest]
    fn test_compose_identity_is_neutral() {
        let describe = |x: i32| format!("#{x}");
        let left = compose!(identity, describe);
        let right = compose!(describe, identity);
        assert_eq!(left(4), describe(4));
        assert_eq!(right(4), describe(4));
    }
}
