//! API request handlers.

mod articles;

pub use articles::{get_article_handler, list_articles_handler};
