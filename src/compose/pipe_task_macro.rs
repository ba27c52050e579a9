//! The `pipe_task!` macro for left-to-right `TaskEither` pipelines.
//!
//! `pipe_task!` threads a [`TaskEither`](crate::effect::TaskEither) through a
//! list of steps by calling its inherent combinators, so a pipeline reads in
//! the order it runs.
//!
//! # Operators
//!
//! - **Lift** (`=>`, or a bare comma): transform the success with `map`
//! - **Bind** (`=>>`): sequence a dependent step with `flat_map`
//! - **Decode** (`=>?`): apply a synchronous, fallible step with
//!   `flat_map_either`
//! - **Reshape error** (`!>`): transform the failure with `map_left`
//!
//! # Examples
//!
//! ```rust
//! use taskeither::control::Either;
//! use taskeither::effect::TaskEither;
//! use taskeither::pipe_task;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let parse = |raw: String| -> Either<String, i32> {
//!     raw.parse::<i32>().map_err(|_| format!("not a number: {raw}")).into()
//! };
//!
//! let pipeline = pipe_task!(
//!     TaskEither::<String, String>::right("20".to_string()),
//!     =>? parse,
//!     =>> |n: i32| TaskEither::right(n + 1),
//!     => |n: i32| n * 2,
//!     !> |error: String| error.len()
//! );
//! assert_eq!(pipeline.invoke().await, Either::Right(42));
//! # });
//! ```

/// Pipes a `TaskEither` through a series of combinators from left to right.
///
/// # Syntax
///
/// - `pipe_task!(task)` - Returns `task` unchanged
/// - `pipe_task!(task, f)` - `task.map(f)` (comma syntax)
/// - `pipe_task!(task, => f)` - `task.map(f)`
/// - `pipe_task!(task, =>> f)` - `task.flat_map(f)`
/// - `pipe_task!(task, =>? f)` - `task.flat_map_either(f)`
/// - `pipe_task!(task, !> f)` - `task.map_left(f)`
/// - `pipe_task!(task, f, =>> g, !> h, ...)` - Chain multiple steps
///
/// Nothing runs until the resulting value is invoked.
///
/// # Type Constraints
///
/// Every step must be `Fn + Send + Sync + 'static`, because the pipeline
/// can be invoked any number of times.
///
/// # Examples
///
/// ```rust
/// use taskeither::control::Either;
/// use taskeither::effect::TaskEither;
/// use taskeither::pipe_task;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let failed: TaskEither<&str, i32> = TaskEither::left("offline");
/// let pipeline = pipe_task!(
///     failed,
///     |n: i32| n + 1,
///     !> |error: &str| format!("fetch failed: {error}")
/// );
/// assert_eq!(pipeline.invoke().await, Either::Left("fetch failed: offline".to_string()));
/// # });
/// ```
#[macro_export]
macro_rules! pipe_task {
    // Base case: the pipeline itself
    ($task:expr) => {{
        $task
    }};

    // Bind operator (terminal case)
    ($task:expr, =>> $function:expr $(,)?) => {{
        $crate::effect::TaskEither::flat_map($task, $function)
    }};

    // Bind operator with continuation
    ($task:expr, =>> $function:expr, $($rest:tt)+) => {{
        let __pipe_task_intermediate = $crate::effect::TaskEither::flat_map($task, $function);
        $crate::pipe_task!(__pipe_task_intermediate, $($rest)+)
    }};

    // Decode operator (terminal case)
    ($task:expr, =>? $function:expr $(,)?) => {{
        $crate::effect::TaskEither::flat_map_either($task, $function)
    }};

    // Decode operator with continuation
    ($task:expr, =>? $function:expr, $($rest:tt)+) => {{
        let __pipe_task_intermediate = $crate::effect::TaskEither::flat_map_either($task, $function);
        $crate::pipe_task!(__pipe_task_intermediate, $($rest)+)
    }};

    // Error reshaping operator (terminal case)
    ($task:expr, !> $function:expr $(,)?) => {{
        $crate::effect::TaskEither::map_left($task, $function)
    }};

    // Error reshaping operator with continuation
    ($task:expr, !> $function:expr, $($rest:tt)+) => {{
        let __pipe_task_intermediate = $crate::effect::TaskEither::map_left($task, $function);
        $crate::pipe_task!(__pipe_task_intermediate, $($rest)+)
    }};

    // Lift operator (terminal case)
    ($task:expr, => $function:expr $(,)?) => {{
        $crate::effect::TaskEither::map($task, $function)
    }};

    // Lift operator with continuation
    ($task:expr, => $function:expr, $($rest:tt)+) => {{
        let __pipe_task_intermediate = $crate::effect::TaskEither::map($task, $function);
        $crate::pipe_task!(__pipe_task_intermediate, $($rest)+)
    }};

    // Comma syntax (implicit map, terminal case)
    ($task:expr, $function:expr $(,)?) => {{
        $crate::effect::TaskEither::map($task, $function)
    }};

    // Comma syntax with continuation
    ($task:expr, $function:expr, $($rest:tt)+) => {{
        let __pipe_task_intermediate = $crate::effect::TaskEither::map($task, $function);
        $crate::pipe_task!(__pipe_task_intermediate, $($rest)+)
    }};
}
