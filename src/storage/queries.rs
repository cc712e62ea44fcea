//! Read queries backing the list/detail API.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::storage::{ArticleSummary, StoredArticle};

/// Lists stored articles, newest published first.
///
/// When `source_filter` is given, matches case-insensitive substrings of the
/// source host (mirrors a `icontains` filter).
pub async fn list_articles(
    pool: &SqlitePool,
    source_filter: Option<&str>,
) -> Result<Vec<ArticleSummary>, DatabaseError> {
    let rows = match source_filter {
        Some(filter) => {
            sqlx::query_as::<_, ArticleSummary>(
                "SELECT id, title, url, source, published_date FROM articles \
                 WHERE LOWER(source) LIKE '%' || LOWER(?) || '%' \
                 ORDER BY published_date DESC, id DESC",
            )
            .bind(filter)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ArticleSummary>(
                "SELECT id, title, url, source, published_date FROM articles \
                 ORDER BY published_date DESC, id DESC",
            )
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

/// Fetches one article by id, or `None` if it doesn't exist.
pub async fn get_article(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<StoredArticle>, DatabaseError> {
    let row = sqlx::query_as::<_, StoredArticle>(
        "SELECT id, title, content_html, content_text, url, source, published_date, fetched_at \
         FROM articles WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Total number of stored articles.
pub async fn count_articles(pool: &SqlitePool) -> Result<i64, DatabaseError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
