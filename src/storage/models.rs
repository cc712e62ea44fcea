//! Storage data models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A freshly harvested article, ready for insertion.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    /// Page title (sanitized)
    pub title: String,
    /// HTML of the content region
    pub content_html: String,
    /// Plain text of the content region
    pub content_text: String,
    /// Canonical fetch URL (unique per article)
    pub url: String,
    /// Host the article was fetched from
    pub source: String,
    /// Resolved publication timestamp (UTC)
    pub published_date: DateTime<Utc>,
    /// When the harvest stored the article
    pub fetched_at: DateTime<Utc>,
}

/// List projection of a stored article.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_date: DateTime<Utc>,
}

/// Full stored article row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredArticle {
    pub id: i64,
    pub title: String,
    pub content_html: String,
    pub content_text: String,
    pub url: String,
    pub source: String,
    pub published_date: DateTime<Utc>,
    pub fetched_at: DateTime<Utc>,
}
