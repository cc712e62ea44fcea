//! SQLite storage layer.
//!
//! Connection pool management, schema migrations, and article
//! insert/query operations.

mod insert;
mod migrations;
mod models;
mod pool;
mod queries;

pub use insert::{article_exists, insert_article};
pub use migrations::run_migrations;
pub use models::{ArticleRecord, ArticleSummary, StoredArticle};
pub use pool::init_db_pool_with_path;
pub use queries::{count_articles, get_article, list_articles};
