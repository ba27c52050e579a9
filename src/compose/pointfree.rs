//! Point-free forms of the `TaskEither` combinators.
//!
//! Each function here takes the step's argument and returns a function from
//! one pipeline to the next, so steps can be listed with [`pipe!`] or
//! [`compose!`](crate::compose!) instead of chained as methods.
//!
//! ```rust
//! use taskeither::compose::pointfree::{chain, get_or_else, map};
//! use taskeither::effect::TaskEither;
//! use taskeither::pipe;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let source: TaskEither<String, &str> = TaskEither::right("foo");
//! let result = pipe!(
//!     source,
//!     map(|text: &str| text.to_uppercase()),
//!     chain(|text: String| TaskEither::right(format!("{text}!"))),
//!     get_or_else(|| "error".to_string())
//! );
//! assert_eq!(result.invoke().await, "FOO!");
//! # });
//! ```
//!
//! [`pipe!`]: crate::pipe!

use std::sync::Arc;

use crate::control::Either;
use crate::effect::{Task, TaskEither};

/// Point-free [`TaskEither::map`].
pub fn map<E, A, B, F>(function: F) -> impl Fn(TaskEither<E, A>) -> TaskEither<E, B> + Send + Sync
where
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    let function = Arc::new(function);
    move |task| {
        let function = Arc::clone(&function);
        task.map(move |value| function(value))
    }
}

/// Point-free [`TaskEither::map_left`].
pub fn map_left<E, E2, A, G>(
    function: G,
) -> impl Fn(TaskEither<E, A>) -> TaskEither<E2, A> + Send + Sync
where
    E: Send + 'static,
    E2: Send + 'static,
    A: Send + 'static,
    G: Fn(E) -> E2 + Send + Sync + 'static,
{
    let function = Arc::new(function);
    move |task| {
        let function = Arc::clone(&function);
        task.map_left(move |error| function(error))
    }
}

/// Point-free [`TaskEither::bimap`].
pub fn bimap<E, E2, A, B, G, F>(
    left_function: G,
    right_function: F,
) -> impl Fn(TaskEither<E, A>) -> TaskEither<E2, B> + Send + Sync
where
    E: Send + 'static,
    E2: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    G: Fn(E) -> E2 + Send + Sync + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    let left_function = Arc::new(left_function);
    let right_function = Arc::new(right_function);
    move |task| {
        let left_function = Arc::clone(&left_function);
        let right_function = Arc::clone(&right_function);
        task.bimap(
            move |error| left_function(error),
            move |value| right_function(value),
        )
    }
}

/// Point-free [`TaskEither::flat_map`].
pub fn chain<E, A, B, F>(function: F) -> impl Fn(TaskEither<E, A>) -> TaskEither<E, B> + Send + Sync
where
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> TaskEither<E, B> + Send + Sync + 'static,
{
    let function = Arc::new(function);
    move |task| {
        let function = Arc::clone(&function);
        task.flat_map(move |value| function(value))
    }
}

/// Point-free [`TaskEither::flat_map_either`].
pub fn chain_either<E, A, B, F>(
    function: F,
) -> impl Fn(TaskEither<E, A>) -> TaskEither<E, B> + Send + Sync
where
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> Either<E, B> + Send + Sync + 'static,
{
    let function = Arc::new(function);
    move |task| {
        let function = Arc::clone(&function);
        task.flat_map_either(move |value| function(value))
    }
}

/// Point-free [`TaskEither::or_else`].
pub fn or_else<E, E2, A, G>(
    function: G,
) -> impl Fn(TaskEither<E, A>) -> TaskEither<E2, A> + Send + Sync
where
    E: Send + 'static,
    E2: Send + 'static,
    A: Send + 'static,
    G: Fn(E) -> TaskEither<E2, A> + Send + Sync + 'static,
{
    let function = Arc::new(function);
    move |task| {
        let function = Arc::clone(&function);
        task.or_else(move |error| function(error))
    }
}

/// Point-free [`TaskEither::fold`].
pub fn fold<E, A, R, G, F>(on_left: G, on_right: F) -> impl Fn(TaskEither<E, A>) -> Task<R> + Send + Sync
where
    E: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
    G: Fn(E) -> R + Send + Sync + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    let on_left = Arc::new(on_left);
    let on_right = Arc::new(on_right);
    move |task| {
        let on_left = Arc::clone(&on_left);
        let on_right = Arc::clone(&on_right);
        task.fold(move |error| on_left(error), move |value| on_right(value))
    }
}

/// Point-free [`TaskEither::get_or_else`].
pub fn get_or_else<E, A, F>(fallback: F) -> impl Fn(TaskEither<E, A>) -> Task<A> + Send + Sync
where
    E: Send + 'static,
    A: Send + 'static,
    F: Fn() -> A + Send + Sync + 'static,
{
    let fallback = Arc::new(fallback);
    move |task| {
        let fallback = Arc::clone(&fallback);
        task.get_or_else(move || fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_step_is_reusable_across_pipelines() {
        let double = map(|n: i32| n * 2);
        let first: TaskEither<String, i32> = TaskEither::right(1);
        let second: TaskEither<String, i32> = TaskEither::right(2);

        assert_eq!(double(first).invoke().await, Either::Right(2));
        assert_eq!(double(second).invoke().await, Either::Right(4));
    }

    #[rstest]
    #[tokio::test]
    async fn test_fold_eliminates_both_sides() {
        let render = fold(|error: String| format!("error: {error}"), |n: i32| n.to_string());

        let success: TaskEither<String, i32> = TaskEither::right(7);
        let failure: TaskEither<String, i32> = TaskEither::left("gone".to_string());

        assert_eq!(render(success).invoke().await, "7");
        assert_eq!(render(failure).invoke().await, "error: gone");
    }

    #[rstest]
    #[tokio::test]
    async fn test_or_else_recovers() {
        let recover = or_else(|error: &str| TaskEither::<usize, i32>::left(error.len()));
        let failure: TaskEither<&str, i32> = TaskEither::left("four");
        assert_eq!(recover(failure).invoke().await, Either::Left(4));
    }
}
