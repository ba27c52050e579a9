//! `TaskEither` - the Deferred Disjoint Result.
//!
//! `TaskEither<E, A>` is a [`Task`] whose invocation resolves to an
//! [`Either<E, A>`](crate::control::Either). It is the effect type services
//! are built from: a transport call is lifted once with
//! [`TaskEither::try_catch`], then decoded, validated and reshaped with
//! combinators, and finally invoked at the edge of the program.
//!
//! # Invariants
//!
//! - Building or combining a `TaskEither` never runs anything.
//! - Each [`invoke`](TaskEither::invoke) runs the whole pipeline again; no
//!   combinator caches or deduplicates invocations.
//! - Failures of the outside world become `Left` at the lifting boundary.
//!   Downstream combinators assume the closures they are given are total
//!   and do not catch panics themselves.
//!
//! # Examples
//!
//! ```rust
//! use taskeither::control::Either;
//! use taskeither::effect::TaskEither;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let fetch_greeting = |name: &'static str| {
//!     TaskEither::try_catch(
//!         move || async move {
//!             if name.is_empty() { Err("empty name") } else { Ok(format!("hello {name}")) }
//!         },
//!         |thrown| thrown.to_string(),
//!     )
//! };
//!
//! let shout = fetch_greeting("ada").map(|greeting| greeting.to_uppercase());
//! assert_eq!(shout.invoke().await, Either::Right("HELLO ADA".to_string()));
//!
//! let failed = fetch_greeting("").map(|greeting| greeting.to_uppercase());
//! assert_eq!(
//!     failed.invoke().await,
//!     Either::Left("operation failed: empty name".to_string())
//! );
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{Task, Thrown};
use crate::control::Either;

/// A deferred, re-invocable asynchronous computation that resolves to
/// either a failure `E` or a success `A`.
///
/// # Laws
///
/// Compared by the values their invocations produce:
///
/// - `t.map(|x| x) == t`
/// - `t.map(f).map(g) == t.map(|x| g(f(x)))`
/// - `TaskEither::right(a).flat_map(f) == f(a)`
/// - `t.flat_map(TaskEither::right) == t`
/// - `t.flat_map(f).flat_map(g) == t.flat_map(|x| f(x).flat_map(g))`
///
/// # Chain depth
///
/// Each `map` or `flat_map` wraps the previous invocation in one more
/// future, and invoking the outer value recurses through every layer on the
/// current stack. Chains folded to a depth of a few thousand steps are fine
/// on a 2 MiB thread stack; tens of thousands overflow it. Build long
/// homogeneous runs with [`TaskEither::sequence`], which stays flat.
pub struct TaskEither<E, A> {
    task: Task<Either<E, A>>,
}

impl<E, A> Clone for TaskEither<E, A> {
    fn clone(&self) -> Self {
        Self {
            task: self.task.clone(),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<E: Send + 'static, A: Send + 'static> TaskEither<E, A> {
    /// Creates a `TaskEither` from a closure whose future already resolves to
    /// an `Either`.
    ///
    /// The closure must not panic; wrap operations that can fail with
    /// [`try_catch`](Self::try_catch) instead.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Either<E, A>> + Send + 'static,
    {
        Self {
            task: Task::new(action),
        }
    }

    /// Wraps an existing task of `Either`.
    pub const fn from_task(task: Task<Either<E, A>>) -> Self {
        Self { task }
    }

    /// Lifts an operation that may fail or panic.
    ///
    /// On every invocation `operation` is called and awaited:
    ///
    /// - `Ok(a)` resolves to `Right(a)`
    /// - `Err(x)` resolves to `Left(on_error(Thrown::Rejected(x)))`
    /// - a panic while calling `operation` or polling its future resolves to
    ///   `Left(on_error(Thrown::Panicked(message)))`
    ///
    /// The resulting future never panics because of `operation`. This is
    /// the only place in the crate where unwinding is caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::control::Either;
    /// use taskeither::effect::{TaskEither, Thrown};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let exploding: TaskEither<String, i32> = TaskEither::try_catch(
    ///     || -> std::future::Ready<Result<i32, String>> { panic!("socket closed") },
    ///     |thrown: Thrown<String>| thrown.to_string(),
    /// );
    ///
    /// assert_eq!(
    ///     exploding.invoke().await,
    ///     Either::Left("operation panicked: socket closed".to_string())
    /// );
    /// # });
    /// ```
    pub fn try_catch<X, Op, Fut, H>(operation: Op, on_error: H) -> Self
    where
        Op: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, X>> + Send + 'static,
        H: Fn(Thrown<X>) -> E + Send + Sync + 'static,
        X: Send + 'static,
    {
        let on_error = Arc::new(on_error);
        Self::new(move || {
            let started = std::panic::catch_unwind(AssertUnwindSafe(|| operation()));
            let on_error = Arc::clone(&on_error);
            async move {
                let outcome = match started {
                    Ok(future) => match AssertUnwindSafe(future).catch_unwind().await {
                        Ok(result) => result.map_err(Thrown::Rejected),
                        Err(payload) => Err(Thrown::from_panic(payload.as_ref())),
                    },
                    Err(payload) => Err(Thrown::from_panic(payload.as_ref())),
                };
                match outcome {
                    Ok(value) => Either::Right(value),
                    Err(thrown) => Either::Left(on_error(thrown)),
                }
            }
        })
    }

    /// A `TaskEither` that always succeeds with a clone of `value`.
    pub fn right(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move || {
            let value = value.clone();
            async move { Either::Right(value) }
        })
    }

    /// A `TaskEither` that always fails with a clone of `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move || {
            let error = error.clone();
            async move { Either::Left(error) }
        })
    }

    /// A `TaskEither` that always resolves to a clone of `either`.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::from_task(Task::of(either))
    }

    /// Checks `predicate` against `value` at invocation time.
    ///
    /// Resolves to `Right(value)` when it holds and `Left(on_fail(value))`
    /// otherwise. Domain rules enter pipelines this way.
    pub fn from_predicate<P, F>(value: A, predicate: P, on_fail: F) -> Self
    where
        A: Clone + Sync,
        P: Fn(&A) -> bool + Send + Sync + 'static,
        F: Fn(A) -> E + Send + Sync + 'static,
    {
        Self::new(move || {
            let result = Either::from_predicate(value.clone(), &predicate, &on_fail);
            async move { result }
        })
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<E, A> TaskEither<E, A> {
    /// Runs the pipeline once and returns its future.
    ///
    /// Call this at the edge of the program. Every call issues the wrapped
    /// work again.
    pub fn invoke(&self) -> BoxFuture<'static, Either<E, A>> {
        self.task.invoke()
    }

    /// Returns the underlying task of `Either`.
    pub fn into_task(self) -> Task<Either<E, A>> {
        self.task
    }
}

// =============================================================================
// Mapping
// =============================================================================

impl<E: Send + 'static, A: Send + 'static> TaskEither<E, A> {
    /// Transforms the success value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> TaskEither<E, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        TaskEither::from_task(self.task.map(move |either| either.map(&function)))
    }

    /// Transforms the failure value (`mapError`).
    #[must_use]
    pub fn map_left<E2, G>(self, function: G) -> TaskEither<E2, A>
    where
        G: Fn(E) -> E2 + Send + Sync + 'static,
        E2: Send + 'static,
    {
        TaskEither::from_task(self.task.map(move |either| either.map_left(&function)))
    }

    /// Transforms whichever side is present.
    #[must_use]
    pub fn bimap<E2, B, G, F>(self, left_function: G, right_function: F) -> TaskEither<E2, B>
    where
        G: Fn(E) -> E2 + Send + Sync + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
        E2: Send + 'static,
        B: Send + 'static,
    {
        TaskEither::from_task(
            self.task
                .map(move |either| either.bimap(&left_function, &right_function)),
        )
    }

    /// Observes the success value without changing the result.
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self::from_task(self.task.map(move |either| {
            if let Either::Right(value) = &either {
                function(value);
            }
            either
        }))
    }

    /// Observes the failure value without changing the result.
    #[must_use]
    pub fn inspect_left<F>(self, function: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        Self::from_task(self.task.map(move |either| {
            if let Either::Left(error) = &either {
                function(error);
            }
            either
        }))
    }
}

// =============================================================================
// Sequencing
// =============================================================================

impl<E: Send + 'static, A: Send + 'static> TaskEither<E, A> {
    /// Sequences a dependent step (`chain`).
    ///
    /// `function` is called only after this step resolved to `Right`, and
    /// its result is awaited after that; the two never run concurrently. A
    /// `Left` short-circuits and `function` is never called.
    ///
    /// Both steps share the error type `E`. Reconcile differing error types
    /// with [`map_left`](Self::map_left) before chaining.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> TaskEither<E, B>
    where
        F: Fn(A) -> TaskEither<E, B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        TaskEither::new(move || {
            let pending = self.invoke();
            let function = Arc::clone(&function);
            async move {
                match pending.await {
                    Either::Left(error) => Either::Left(error),
                    Either::Right(value) => function(value).invoke().await,
                }
            }
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[must_use]
    pub fn and_then<B, F>(self, function: F) -> TaskEither<E, B>
    where
        F: Fn(A) -> TaskEither<E, B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Chains a synchronous step that may fail, such as a decoder or a
    /// validator.
    #[must_use]
    pub fn flat_map_either<B, F>(self, function: F) -> TaskEither<E, B>
    where
        F: Fn(A) -> Either<E, B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        TaskEither::from_task(self.task.map(move |either| either.flat_map(&function)))
    }

    /// Recovers from a failure with another step.
    ///
    /// `function` runs only when this step resolved to `Left`.
    #[must_use]
    pub fn or_else<E2, G>(self, function: G) -> TaskEither<E2, A>
    where
        G: Fn(E) -> TaskEither<E2, A> + Send + Sync + 'static,
        E2: Send + 'static,
    {
        let function = Arc::new(function);
        TaskEither::new(move || {
            let pending = self.invoke();
            let function = Arc::clone(&function);
            async move {
                match pending.await {
                    Either::Left(error) => function(error).invoke().await,
                    Either::Right(value) => Either::Right(value),
                }
            }
        })
    }

    /// Runs `other` after this step and pairs both successes.
    ///
    /// `other` is not invoked when this step fails.
    #[must_use]
    pub fn zip<B>(self, other: TaskEither<E, B>) -> TaskEither<E, (A, B)>
    where
        B: Send + 'static,
    {
        TaskEither::new(move || {
            let first = self.invoke();
            let other = other.clone();
            async move {
                match first.await {
                    Either::Left(error) => Either::Left(error),
                    Either::Right(first) => other.invoke().await.map(|second| (first, second)),
                }
            }
        })
    }

    /// Runs this step and `other` concurrently and pairs both successes.
    ///
    /// Both steps always run to completion. When both fail, this step's
    /// failure is returned.
    #[must_use]
    pub fn par_zip<B>(self, other: TaskEither<E, B>) -> TaskEither<E, (A, B)>
    where
        B: Send + 'static,
    {
        TaskEither::new(move || {
            let first = self.invoke();
            let second = other.invoke();
            async move {
                match futures::join!(first, second) {
                    (Either::Right(first), Either::Right(second)) => Either::Right((first, second)),
                    (Either::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
                }
            }
        })
    }

    /// Runs `tasks` one after another and collects their successes in order.
    ///
    /// The first failure wins and the remaining tasks are not invoked.
    pub fn sequence<I>(tasks: I) -> TaskEither<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Vec<Self> = tasks.into_iter().collect();
        TaskEither::new(move || {
            let tasks = tasks.clone();
            async move {
                let mut values = Vec::with_capacity(tasks.len());
                for task in &tasks {
                    match task.invoke().await {
                        Either::Left(error) => return Either::Left(error),
                        Either::Right(value) => values.push(value),
                    }
                }
                Either::Right(values)
            }
        })
    }
}

// =============================================================================
// Terminal Elimination
// =============================================================================

impl<E: Send + 'static, A: Send + 'static> TaskEither<E, A> {
    /// Eliminates the result at invocation time (`match`).
    ///
    /// Exactly one of the two functions runs per invocation.
    #[must_use]
    pub fn fold<R, G, F>(self, on_left: G, on_right: F) -> Task<R>
    where
        G: Fn(E) -> R + Send + Sync + 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
        R: Send + 'static,
    {
        self.task
            .map(move |either| either.fold(&on_left, &on_right))
    }

    /// Unwraps the success, or calls `fallback` on failure.
    ///
    /// `fallback` is never called during composition, and is called at
    /// invocation only if the result is `Left`.
    #[must_use]
    pub fn get_or_else<F>(self, fallback: F) -> Task<A>
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        self.task.map(move |either| either.get_or_else(&fallback))
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<E, A> fmt::Display for TaskEither<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<TaskEither>")
    }
}

impl<E, A> fmt::Debug for TaskEither<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TaskEither").finish_non_exhaustive()
    }
}

impl<E: Send + 'static, A: Send + 'static> From<Task<Either<E, A>>> for TaskEither<E, A> {
    fn from(task: Task<Either<E, A>>) -> Self {
        Self::from_task(task)
    }
}

static_assertions::assert_impl_all!(TaskEither<String, i32>: Send, Sync, Clone);
