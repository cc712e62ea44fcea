//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the
//! application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Types of errors that can occur during article processing.
///
/// This enum categorizes actual error conditions - failures that prevent an
/// article from being fetched and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestTooManyRequests,
    HttpRequestForbidden, // 403 - typically bot detection on news sites
    HttpRequestNotFound,  // 404
    HttpRequestStatusError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    ProcessUrlTimeout,
    // Storage errors
    DatabaseInsertError,
}

/// Types of warnings that can occur during article processing.
///
/// Warnings indicate missing optional data that doesn't prevent successful
/// processing but is worth tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningType {
    MissingTitle,         // Title tag is missing or empty
    MissingContentRegion, // No article/post-content/entry-content/main element
}

/// Types of informational metrics tracked during article processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// URL already stored; fetch skipped
    DuplicateSkipped,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::ProcessUrlTimeout => "Process URL timeout",
            ErrorType::DatabaseInsertError => "Database insert error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingContentRegion => "Missing content region",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DuplicateSkipped => "Duplicate URL skipped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(ErrorType::HttpRequestNotFound.as_str(), "Not Found (404)");
        assert_eq!(
            ErrorType::DatabaseInsertError.as_str(),
            "Database insert error"
        );
    }

    #[test]
    fn test_all_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(!error_type.as_str().is_empty());
        }
        for warning_type in WarningType::iter() {
            assert!(!warning_type.as_str().is_empty());
        }
        for info_type in InfoType::iter() {
            assert!(!info_type.as_str().is_empty());
        }
    }

    #[test]
    fn test_error_type_display_matches_as_str() {
        for error_type in ErrorType::iter() {
            assert_eq!(format!("{}", error_type), error_type.as_str());
        }
    }
}
