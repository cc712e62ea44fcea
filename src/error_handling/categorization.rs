//! Error categorization and retry strategy.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::stats::ProcessingStats;
use super::types::ErrorType;

/// Creates an exponential backoff retry strategy.
///
/// Configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR` (doubles delay each retry)
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Total attempts bounded by `RETRY_MAX_ATTEMPTS`
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::RetryIf`. The
/// iterator yields `RETRY_MAX_ATTEMPTS - 1` delays (one between each pair of
/// attempts), so retries can never run unbounded.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS - 1)
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return match status.as_u16() {
            403 => ErrorType::HttpRequestForbidden,
            404 => ErrorType::HttpRequestNotFound,
            429 => ErrorType::HttpRequestTooManyRequests,
            _ => ErrorType::HttpRequestStatusError,
        };
    }

    if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Updates error statistics based on a `reqwest::Error`.
///
/// Analyzes the error and increments the appropriate `ErrorType` counter.
pub fn update_error_stats(error_stats: &ProcessingStats, error: &reqwest::Error) {
    error_stats.increment_error(categorize_reqwest_error(error));
}
