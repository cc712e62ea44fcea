//! API state and response types.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::storage::{ArticleSummary, StoredArticle};

/// Display format for publication dates ("28.10.2025 12:00:00").
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    /// Database connection pool
    pub pool: Arc<SqlitePool>,
}

/// List-endpoint article representation.
#[derive(Debug, Serialize)]
pub struct ArticleSummaryResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_date: DateTime<Utc>,
    /// `published_date` rendered with [`DISPLAY_DATE_FORMAT`]
    pub published_date_display: String,
}

impl From<ArticleSummary> for ArticleSummaryResponse {
    fn from(article: ArticleSummary) -> Self {
        let published_date_display = article
            .published_date
            .format(DISPLAY_DATE_FORMAT)
            .to_string();
        Self {
            id: article.id,
            title: article.title,
            url: article.url,
            source: article.source,
            published_date: article.published_date,
            published_date_display,
        }
    }
}

/// Detail-endpoint article representation.
#[derive(Debug, Serialize)]
pub struct ArticleDetailResponse {
    pub id: i64,
    pub title: String,
    pub content_html: String,
    pub content_text: String,
    pub url: String,
    pub source: String,
    pub published_date: DateTime<Utc>,
    /// `published_date` rendered with [`DISPLAY_DATE_FORMAT`]
    pub published_date_display: String,
    pub fetched_at: DateTime<Utc>,
}

impl From<StoredArticle> for ArticleDetailResponse {
    fn from(article: StoredArticle) -> Self {
        let published_date_display = article
            .published_date
            .format(DISPLAY_DATE_FORMAT)
            .to_string();
        Self {
            id: article.id,
            title: article.title,
            content_html: article.content_html,
            content_text: article.content_text,
            url: article.url,
            source: article.source,
            published_date: article.published_date,
            published_date_display,
            fetched_at: article.fetched_at,
        }
    }
}

/// JSON error body for non-2xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
