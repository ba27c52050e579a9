//! `Task` - the Deferred Computation.
//!
//! A `Task<A>` describes an asynchronous computation producing `A` without
//! starting it. Work begins only when [`Task::invoke`] is called, and every
//! call starts the work again: there is no caching and no memoization.
//!
//! Unlike a plain `Future`, a `Task` is a value that can be stored, cloned,
//! passed around and invoked any number of times.
//!
//! # Examples
//!
//! ```rust
//! use taskeither::effect::Task;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = calls.clone();
//!
//! let task = Task::new(move || {
//!     let counter = counter.clone();
//!     async move { counter.fetch_add(1, Ordering::SeqCst) + 1 }
//! });
//!
//! // Nothing has run yet.
//! assert_eq!(calls.load(Ordering::SeqCst), 0);
//!
//! assert_eq!(task.invoke().await, 1);
//! assert_eq!(task.invoke().await, 2);
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

type Thunk<A> = Arc<dyn Fn() -> BoxFuture<'static, A> + Send + Sync>;

/// A deferred, re-invocable asynchronous computation.
///
/// # Type Parameters
///
/// - `A`: The value produced by each invocation.
///
/// # Monad Laws
///
/// Compared by the values their invocations produce:
///
/// 1. **Left Identity**: `Task::of(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `task.flat_map(Task::of) == task`
/// 3. **Associativity**: `task.flat_map(f).flat_map(g) == task.flat_map(|x| f(x).flat_map(g))`
///
/// Every derivation adds one nested future that invocation recurses
/// through, so chains tens of thousands of steps deep can exhaust the
/// thread stack.
///
/// # Examples
///
/// ```rust
/// use taskeither::effect::Task;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let task = Task::of(10).map(|x| x * 2).flat_map(|x| Task::of(x + 1));
/// assert_eq!(task.invoke().await, 21);
/// # });
/// ```
pub struct Task<A> {
    thunk: Thunk<A>,
}

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Creates a task from a closure returning a future.
    ///
    /// The closure is not called here. It is called once per
    /// [`invoke`](Self::invoke).
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            thunk: Arc::new(move || action().boxed()),
        }
    }

    /// Creates a task that yields a clone of `value` on every invocation.
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move || {
            let value = value.clone();
            async move { value }
        })
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<A> Task<A> {
    /// Starts the computation and returns its future.
    ///
    /// Each call runs the underlying work again. A panic inside the work
    /// surfaces unchanged when the returned future is awaited.
    pub fn invoke(&self) -> BoxFuture<'static, A> {
        (self.thunk)()
    }
}

// =============================================================================
// Functor / Monad
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Transforms the value of every future invocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::effect::Task;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let task = Task::of(21).map(|x| x * 2);
    /// assert_eq!(task.invoke().await, 42);
    /// # });
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let pending = self.invoke();
            let function = Arc::clone(&function);
            async move { function(pending.await) }
        })
    }

    /// Sequences a dependent task after this one.
    ///
    /// `function` is called only after this task has produced its value.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let pending = self.invoke();
            let function = Arc::clone(&function);
            async move {
                let value = pending.await;
                function(value).invoke().await
            }
        })
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<A> fmt::Display for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_task(counter: Arc<AtomicUsize>) -> Task<usize> {
        Task::new(move || {
            let counter = counter.clone();
            async move { counter.fetch_add(1, Ordering::SeqCst) + 1 }
        })
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Task::of(1)), "<Task>");
    }

    #[rstest]
    #[tokio::test]
    async fn test_construction_does_no_work() {
        let counter = Arc::new(AtomicUsize::new(0));
        let _task = counting_task(counter.clone());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_each_invocation_reruns_work() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task = counting_task(counter.clone());

        assert_eq!(task.invoke().await, 1);
        assert_eq!(task.invoke().await, 2);
        assert_eq!(task.clone().invoke().await, 3);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_is_deferred() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mapped = counting_task(counter.clone()).map(|n| n * 10);

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(mapped.invoke().await, 10);
    }

    #[rstest]
    #[tokio::test]
    async fn test_flat_map_sequences() {
        let task = Task::of(2).flat_map(|x| Task::of(x + 3));
        assert_eq!(task.invoke().await, 5);
    }
}
