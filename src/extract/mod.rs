//! HTML parsing and extraction.
//!
//! This module provides article extraction from fetched pages:
//! - Title and content-region extraction (`html`)
//! - Heuristic publication-date resolution (`date`)

mod date;
mod html;

pub use date::{resolve_publication_date, resolve_publication_date_at};
pub use html::{extract_article, extract_title, ExtractedArticle, FALLBACK_TITLE};
