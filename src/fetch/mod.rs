//! Article fetching and processing.
//!
//! The per-URL pipeline: HTTP fetch, HTML parsing, article extraction,
//! publication-date resolution, and database insertion.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use scraper::Html;
use sqlx::SqlitePool;

use crate::config::{MAX_RESPONSE_BODY_SIZE, TITLE_LOG_PREVIEW_CHARS};
use crate::error_handling::{update_error_stats, ErrorType, ProcessingStats};
use crate::extract::{extract_article, resolve_publication_date};
use crate::storage::{insert_article, ArticleRecord};
use crate::utils::sanitize::clean_text;

/// Shared resources for article processing tasks.
pub struct ProcessingContext {
    /// HTTP client used for all fetches
    pub client: Arc<reqwest::Client>,
    /// Database connection pool
    pub pool: Arc<SqlitePool>,
    /// Error/warning/info counters shared across tasks
    pub error_stats: Arc<ProcessingStats>,
}

impl ProcessingContext {
    pub fn new(
        client: Arc<reqwest::Client>,
        pool: Arc<SqlitePool>,
        error_stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            pool,
            error_stats,
        }
    }
}

/// Fetches one URL, extracts the article, resolves its publication date, and
/// stores the result.
///
/// Oversized and empty bodies are skipped silently (logged at debug level);
/// HTTP and database failures propagate so the caller can count and retry.
pub async fn handle_article_request(ctx: &ProcessingContext, url: &str) -> Result<()> {
    debug!("Fetching {url}");

    let response = match ctx.client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            update_error_stats(&ctx.error_stats, &e);
            return Err(anyhow::Error::from(e).context(format!("Failed to fetch {url}")));
        }
    };

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            update_error_stats(&ctx.error_stats, &e);
            return Err(anyhow::Error::from(e).context(format!("HTTP error for {url}")));
        }
    };

    let final_url = response.url().clone();

    if let Some(length) = response.content_length() {
        if length as usize > MAX_RESPONSE_BODY_SIZE {
            debug!("Skipping {url}: declared body size {length} exceeds limit");
            return Ok(());
        }
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            update_error_stats(&ctx.error_stats, &e);
            return Err(anyhow::Error::from(e).context(format!("Failed to read body of {url}")));
        }
    };

    if body.len() > MAX_RESPONSE_BODY_SIZE {
        debug!("Skipping {url}: body too large ({} bytes)", body.len());
        return Ok(());
    }
    if body.trim().is_empty() {
        debug!("Skipping {url}: empty body");
        return Ok(());
    }

    // Parse and extract synchronously; the parsed document is not Send and
    // must be dropped before the insert await point.
    let record = {
        let document = Html::parse_document(&body);
        let extracted = extract_article(&document, &body, &ctx.error_stats);
        let published_date = resolve_publication_date(&document, &extracted.full_text);
        let source = final_url.host_str().unwrap_or_default().to_string();

        ArticleRecord {
            title: clean_text(&extracted.title),
            content_html: clean_text(&extracted.content_html),
            content_text: clean_text(&extracted.content_text),
            url: url.to_string(),
            source,
            published_date,
            fetched_at: Utc::now(),
        }
    };

    let id = insert_article(&ctx.pool, &record).await.map_err(|e| {
        ctx.error_stats.increment_error(ErrorType::DatabaseInsertError);
        anyhow::Error::from(e).context(format!("Failed to store article for {url}"))
    })?;

    let title_preview: String = record.title.chars().take(TITLE_LOG_PREVIEW_CHARS).collect();
    info!(
        "Stored article {id}: {title_preview} ({}, {})",
        record.source,
        record.published_date.format("%d.%m.%Y %H:%M:%S")
    );

    Ok(())
}
