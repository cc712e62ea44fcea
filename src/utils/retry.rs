//! Error retriability determination.

use anyhow::Error;

use crate::config::HTTP_STATUS_TOO_MANY_REQUESTS;

/// Determines if an error is retriable (should be retried).
///
/// Only transient errors that might succeed on retry are retriable:
/// timeouts, connection failures, 5xx responses, and 429 rate limiting.
/// Permanent errors (other 4xx responses, URL parse errors, database errors,
/// decode errors) are not.
///
/// Uses error-chain downcasting rather than string matching, so wrapped
/// errors keep their categorization.
pub(crate) fn is_retriable_error(error: &Error) -> bool {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                let status_code = status.as_u16();

                // 429 is retriable with backoff
                if status_code == HTTP_STATUS_TOO_MANY_REQUESTS {
                    return true;
                }
                // Permanent client errors
                if (400..500).contains(&status_code) {
                    return false;
                }
                // Server errors are temporary
                if (500..600).contains(&status_code) {
                    return true;
                }
            }

            if reqwest_err.is_timeout() || reqwest_err.is_connect() || reqwest_err.is_request() {
                return true;
            }
            if reqwest_err.is_redirect() || reqwest_err.is_decode() {
                return false;
            }
        }

        if cause.downcast_ref::<url::ParseError>().is_some() {
            return false;
        }
        if cause.downcast_ref::<sqlx::Error>().is_some() {
            return false;
        }
    }

    // Unknown errors might be transient network issues
    true
}
