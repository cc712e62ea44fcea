//! Utility functions for article processing.
//!
//! This module provides:
//! - Per-URL processing orchestration with retry logic
//! - Error retriability determination
//! - Stored-text sanitization
//! - CSS selector parsing utilities

mod process;
mod retry;
pub mod sanitize;
mod selector;

pub use process::{process_article, ProcessArticleResult};
pub use selector::parse_selector_unsafe;
