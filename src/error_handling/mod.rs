//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Retry strategy configuration
//!
//! Error types are categorized into:
//! - **Errors**: Failures that prevent successful processing
//! - **Warnings**: Missing optional data that doesn't prevent processing
//! - **Info**: Informational metrics (duplicate skips, etc.)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{DatabaseError, ErrorType, InfoType, InitializationError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestTimeoutError), 1);

        stats.increment_warning(WarningType::MissingTitle);
        assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);

        stats.increment_info(InfoType::DuplicateSkipped);
        assert_eq!(stats.get_info_count(InfoType::DuplicateSkipped), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestNotFound);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_warning(WarningType::MissingContentRegion);
        stats.increment_info(InfoType::DuplicateSkipped);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 1);
    }

    #[test]
    fn test_retry_strategy_is_bounded() {
        let delays: Vec<_> = get_retry_strategy().collect();
        assert_eq!(delays.len(), crate::config::RETRY_MAX_ATTEMPTS - 1);
        // Delays grow but stay capped
        for window in delays.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }
}
