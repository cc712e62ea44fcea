//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, size limits, and other operational
//! parameters.

use std::time::Duration;

/// Progress logging interval in seconds
pub const LOGGING_INTERVAL: u64 = 5;

/// Per-URL processing timeout
///
/// Covers the HTTP request (including retries with backoff), HTML parsing,
/// date resolution, and the database insert for one article.
pub const URL_PROCESSING_TIMEOUT: Duration = Duration::from_secs(60);

/// Default SQLite database path
pub const DB_PATH: &str = "./article_harvester.db";

/// Default read-API port
pub const DEFAULT_API_PORT: u16 = 8080;

/// Default per-request HTTP timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default maximum concurrent fetches
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a modern Chrome browser; news sites routinely refuse obviously
/// non-browser agents. Users can override this via the `--user-agent` flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Accept-Language sent with every request.
///
/// Polish first: the harvested sources are predominantly Polish-language and
/// some serve different markup per locale.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "pl-PL,pl;q=0.9,en-US;q=0.8,en;q=0.7";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are skipped to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length accepted from the input list
pub const MAX_URL_LENGTH: usize = 2048;

/// Title preview length used in log output
pub const TITLE_LOG_PREVIEW_CHARS: usize = 60;

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of attempts per URL (initial attempt + retries)
pub const RETRY_MAX_ATTEMPTS: usize = 3;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
