//! Tests for the lifting boundary, `TaskEither::try_catch`.
//!
//! Whatever the wrapped operation does (resolve, reject, panic while being
//! called, panic while being polled) the invocation resolves to an `Either`
//! and never panics.

#![cfg(feature = "effect")]

use rstest::rstest;
use std::future::Ready;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use taskeither::control::Either;
use taskeither::effect::{TaskEither, Thrown};

#[rstest]
#[tokio::test]
async fn success_resolves_to_right() {
    let task: TaskEither<String, i32> =
        TaskEither::try_catch(|| async { Ok::<_, String>(42) }, |thrown| thrown.to_string());
    assert_eq!(task.invoke().await, Either::Right(42));
}

#[rstest]
#[tokio::test]
async fn rejection_is_handed_to_the_error_handler() {
    let task: TaskEither<Thrown<String>, i32> = TaskEither::try_catch(
        || async { Err::<i32, _>("503 Service Unavailable".to_string()) },
        |thrown| thrown,
    );
    assert_eq!(
        task.invoke().await,
        Either::Left(Thrown::Rejected("503 Service Unavailable".to_string()))
    );
}

#[rstest]
#[tokio::test]
async fn synchronous_panic_becomes_left() {
    let task: TaskEither<Thrown<String>, i32> = TaskEither::try_catch(
        || -> Ready<Result<i32, String>> { panic!("could not open socket") },
        |thrown| thrown,
    );
    assert_eq!(
        task.invoke().await,
        Either::Left(Thrown::Panicked("could not open socket".to_string()))
    );
}

#[rstest]
#[tokio::test]
async fn panic_while_polling_becomes_left() {
    let task: TaskEither<String, i32> = TaskEither::try_catch(
        || async {
            tokio::task::yield_now().await;
            let index = 3;
            let values: Vec<i32> = Vec::new();
            Ok::<_, String>(values[index])
        },
        |thrown| thrown.to_string(),
    );

    let result = task.invoke().await;
    assert!(result.is_left());
    assert!(
        result
            .get_left()
            .is_some_and(|message| message.starts_with("operation panicked: index out of bounds"))
    );
}

#[rstest]
#[tokio::test]
async fn formatted_panic_messages_are_kept() {
    let task: TaskEither<Thrown<()>, i32> = TaskEither::try_catch(
        || async {
            let code = 7;
            if code > 0 {
                panic!("exit code {code}");
            }
            Ok(0)
        },
        |thrown| thrown,
    );
    assert_eq!(
        task.invoke().await,
        Either::Left(Thrown::Panicked("exit code 7".to_string()))
    );
}

#[rstest]
#[tokio::test]
async fn the_operation_is_not_called_until_invoked() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let task: TaskEither<String, usize> = TaskEither::try_catch(
        move || {
            let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok::<_, String>(count) }
        },
        |thrown| thrown.to_string(),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(task.invoke().await, Either::Right(1));
    assert_eq!(task.invoke().await, Either::Right(2));
}

#[rstest]
#[tokio::test]
async fn a_panicking_pipeline_can_be_invoked_again() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let flaky: TaskEither<bool, &str> = TaskEither::try_catch(
        move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    panic!("first attempt explodes");
                }
                Ok::<_, ()>("recovered")
            }
        },
        |thrown| thrown.is_panic(),
    );

    assert_eq!(flaky.invoke().await, Either::Left(true));
    assert_eq!(flaky.invoke().await, Either::Right("recovered"));
}

#[rstest]
#[tokio::test]
async fn downstream_steps_see_the_mapped_error() {
    #[derive(Debug, PartialEq)]
    enum FetchError {
        Network(String),
    }

    let task = TaskEither::try_catch(
        || async { Err::<String, _>("timeout") },
        |thrown: Thrown<&str>| FetchError::Network(thrown.to_string()),
    )
    .map(|body| body.len());

    assert_eq!(
        task.invoke().await,
        Either::Left(FetchError::Network("operation failed: timeout".to_string()))
    );
}
