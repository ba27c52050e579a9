//! Pipeline configuration loaded from environment variables.
//!
//! Every variable is optional:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TASKEITHER_TIMEOUT_MS` | per-attempt timeout | none |
//! | `TASKEITHER_RETRY_ATTEMPTS` | total attempts | `1` |
//! | `TASKEITHER_RETRY_DELAY_MS` | delay before the first retry | `100` |
//! | `TASKEITHER_RETRY_MAX_DELAY_MS` | cap for a single delay | `10000` |

use std::env;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

use super::RetryPolicy;

/// Per-attempt timeout variable.
pub const TIMEOUT_MS: &str = "TASKEITHER_TIMEOUT_MS";
/// Attempt count variable.
pub const RETRY_ATTEMPTS: &str = "TASKEITHER_RETRY_ATTEMPTS";
/// Initial backoff variable.
pub const RETRY_DELAY_MS: &str = "TASKEITHER_RETRY_DELAY_MS";
/// Backoff cap variable.
pub const RETRY_MAX_DELAY_MS: &str = "TASKEITHER_RETRY_MAX_DELAY_MS";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value is unusable.
    InvalidValue {
        /// The name of the variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Timeout and retry settings applied with
/// [`TaskEither::with_config`](crate::effect::TaskEither::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Per-attempt timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Retry behavior after a failed attempt.
    pub retry: RetryPolicy,
}

impl PipelineConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but is not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value is set but is not a
    /// non-negative integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskeither::effect::PipelineConfig;
    /// use std::time::Duration;
    ///
    /// let config = PipelineConfig::from_lookup(|key| match key {
    ///     "TASKEITHER_TIMEOUT_MS" => Some("1500".to_string()),
    ///     "TASKEITHER_RETRY_ATTEMPTS" => Some("3".to_string()),
    ///     _ => None,
    /// })?;
    ///
    /// assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    /// assert_eq!(config.retry.max_attempts, 3);
    /// assert_eq!(config.retry.initial_delay, Duration::from_millis(100));
    /// # Ok::<(), taskeither::effect::ConfigError>(())
    /// ```
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let timeout = parse_optional::<u64, _>(&lookup, TIMEOUT_MS)?.map(Duration::from_millis);
        let defaults = RetryPolicy::default();

        let max_attempts =
            parse_optional(&lookup, RETRY_ATTEMPTS)?.unwrap_or(defaults.max_attempts);
        let initial_delay = parse_optional(&lookup, RETRY_DELAY_MS)?
            .map_or(defaults.initial_delay, Duration::from_millis);
        let max_delay = parse_optional(&lookup, RETRY_MAX_DELAY_MS)?
            .map_or(defaults.max_delay, Duration::from_millis);

        if initial_delay > max_delay {
            return Err(ConfigError::InvalidValue {
                key: RETRY_DELAY_MS.to_string(),
                message: format!("must not exceed {RETRY_MAX_DELAY_MS} ({max_delay:?})"),
            });
        }

        Ok(Self {
            timeout,
            retry: RetryPolicy {
                max_attempts,
                initial_delay,
                max_delay,
            },
        })
    }
}

/// Looks up `key` and parses it when present.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the value is set but cannot be parsed.
fn parse_optional<T, L>(lookup: &L, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
    L: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        })
        .transpose()
}
