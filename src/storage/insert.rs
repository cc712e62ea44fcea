//! Article insertion and URL deduplication.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::storage::ArticleRecord;

/// Checks whether an article with this exact URL is already stored.
///
/// Used by the harvest loop to skip fetching known URLs entirely.
pub async fn article_exists(pool: &SqlitePool, url: &str) -> Result<bool, DatabaseError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE url = ?")
        .bind(url)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Inserts an article record and returns its row id.
///
/// The `articles.url` column carries a UNIQUE constraint, so a concurrent
/// insert of the same URL surfaces as `DatabaseError::SqlError` - callers
/// count it as a failure for that URL, not a fatal condition.
pub async fn insert_article(
    pool: &SqlitePool,
    record: &ArticleRecord,
) -> Result<i64, DatabaseError> {
    let result = sqlx::query(
        "INSERT INTO articles \
         (title, content_html, content_text, url, source, published_date, fetched_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.title)
    .bind(&record.content_html)
    .bind(&record.content_text)
    .bind(&record.url)
    .bind(&record.source)
    .bind(record.published_date)
    .bind(record.fetched_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::run_migrations;
    use chrono::{TimeZone, Utc};

    async fn create_test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");
        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    fn create_test_record(url: &str) -> ArticleRecord {
        ArticleRecord {
            title: "Test Article".to_string(),
            content_html: "<article><p>Body</p></article>".to_string(),
            content_text: "Body".to_string(),
            url: url.to_string(),
            source: "example.com".to_string(),
            published_date: Utc.with_ymd_and_hms(2025, 10, 28, 0, 0, 0).unwrap(),
            fetched_at: Utc.with_ymd_and_hms(2025, 11, 4, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_article_basic() {
        let pool = create_test_pool().await;
        let record = create_test_record("https://example.com/a");

        let id = insert_article(&pool, &record).await.expect("insert");
        assert!(id > 0);

        let stored_title: String = sqlx::query_scalar("SELECT title FROM articles WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .expect("fetch");
        assert_eq!(stored_title, "Test Article");
    }

    #[tokio::test]
    async fn test_article_exists() {
        let pool = create_test_pool().await;
        let record = create_test_record("https://example.com/a");

        assert!(!article_exists(&pool, &record.url).await.expect("exists"));
        insert_article(&pool, &record).await.expect("insert");
        assert!(article_exists(&pool, &record.url).await.expect("exists"));
        assert!(!article_exists(&pool, "https://example.com/other")
            .await
            .expect("exists"));
    }

    #[tokio::test]
    async fn test_duplicate_url_rejected() {
        let pool = create_test_pool().await;
        let record = create_test_record("https://example.com/a");

        insert_article(&pool, &record).await.expect("first insert");
        let second = insert_article(&pool, &record).await;
        assert!(matches!(second, Err(DatabaseError::SqlError(_))));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_published_date_roundtrip() {
        let pool = create_test_pool().await;
        let record = create_test_record("https://example.com/a");
        let id = insert_article(&pool, &record).await.expect("insert");

        let stored: chrono::DateTime<Utc> =
            sqlx::query_scalar("SELECT published_date FROM articles WHERE id = ?")
                .bind(id)
                .fetch_one(&pool)
                .await
                .expect("fetch");
        assert_eq!(stored, record.published_date);
    }
}
