#![cfg(all(feature = "serde", feature = "policy"))]

//! Integration tests for serde support.
//!
//! `Either` and the policy configuration types serialize with serde's
//! default externally tagged representation.

use rstest::rstest;
use std::time::Duration;
use taskeither::control::Either;
use taskeither::effect::{PipelineConfig, RetryPolicy};

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
#[case(r#"{"Right":7}"#, Either::Right(7))]
#[case(r#"{"Left":"gone"}"#, Either::Left("gone".to_string()))]
fn test_either_external_tagging(#[case] json: &str, #[case] expected: Either<String, i32>) {
    let decoded: Either<String, i32> = serde_json::from_str(json).unwrap();
    assert_eq!(decoded, expected);
    assert_eq!(serde_json::to_string(&expected).unwrap(), json);
}

#[rstest]
fn test_either_rejects_unknown_variant() {
    let decoded: Result<Either<String, i32>, _> = serde_json::from_str(r#"{"Middle":1}"#);
    assert!(decoded.is_err());
}

// =============================================================================
// Policy Configuration
// =============================================================================

#[rstest]
fn test_pipeline_config_json_roundtrip() {
    let config = PipelineConfig {
        timeout: Some(Duration::from_millis(1500)),
        retry: RetryPolicy::exponential(3, Duration::from_millis(200))
            .with_max_delay(Duration::from_secs(2)),
    };

    let json = serde_json::to_string(&config).unwrap();
    let restored: PipelineConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, restored);
}

#[rstest]
fn test_retry_policy_fields_are_named() {
    let value = serde_json::to_value(RetryPolicy::default()).unwrap();
    assert_eq!(value["max_attempts"], 1);
    assert!(value.get("initial_delay").is_some());
    assert!(value.get("max_delay").is_some());
}
