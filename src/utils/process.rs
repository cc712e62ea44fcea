//! Per-URL processing orchestration with retry logic.

use std::sync::Arc;

use anyhow::{Error, Result};

use crate::error_handling::get_retry_strategy;
use crate::fetch::{handle_article_request, ProcessingContext};

use super::retry::is_retriable_error;

/// Result of processing an article URL, including retry count.
#[derive(Debug)]
pub struct ProcessArticleResult {
    /// `Ok(())` when the article was fetched and stored
    pub result: Result<(), Error>,
    /// Number of retry attempts made (not counting the initial attempt)
    pub retry_count: u32,
}

/// Processes a single article URL with selective retry logic.
///
/// Only network-related errors (timeouts, connection failures, 5xx, 429) are
/// retried, with exponential backoff; permanent errors (other 4xx, parse
/// failures, database errors) fail immediately.
///
/// # Arguments
///
/// * `url` - The URL to process (shared to avoid cloning on retries)
/// * `ctx` - Processing context containing all shared resources
pub async fn process_article(url: Arc<str>, ctx: Arc<ProcessingContext>) -> ProcessArticleResult {
    log::debug!("Starting process for URL: {}", url.as_ref());

    let retry_strategy = get_retry_strategy();

    // One increment per attempt, so retries = attempts - 1
    let attempt_count = Arc::new(std::sync::atomic::AtomicU32::new(0));

    let result = tokio_retry::RetryIf::spawn(
        retry_strategy,
        {
            let url = Arc::clone(&url);
            let ctx = Arc::clone(&ctx);
            let attempt_count = Arc::clone(&attempt_count);
            move || {
                attempt_count.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                let url = Arc::clone(&url);
                let ctx = Arc::clone(&ctx);

                async move { handle_article_request(&ctx, url.as_ref()).await }
            }
        },
        |e: &Error| is_retriable_error(e),
    )
    .await;

    let total_attempts = attempt_count.load(std::sync::atomic::Ordering::SeqCst);
    let retry_count = total_attempts.saturating_sub(1);

    let final_result = match result {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Error processing URL {} after retries: {e}", url.as_ref());
            Err(e)
        }
    };

    ProcessArticleResult {
        result: final_result,
        retry_count,
    }
}
