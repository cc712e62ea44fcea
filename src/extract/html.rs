//! Article content extraction.
//!
//! This module pulls the displayable pieces out of a fetched page:
//! - Page title
//! - Main content region (HTML and plain text)
//! - Whitespace-normalized plain text of the whole document, which feeds the
//!   publication-date resolver

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::parse_selector_unsafe;

const TITLE_SELECTOR_STR: &str = "title";

/// Content-region candidates, most specific first. The first match wins;
/// pages with none of these fall back to the whole document.
const CONTENT_REGION_SELECTOR_STRS: &[&str] =
    &["article", "div.post-content", "div.entry-content", "main"];

/// Title stored when the page carries no usable `<title>`.
pub const FALLBACK_TITLE: &str = "No title";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static CONTENT_REGION_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTENT_REGION_SELECTOR_STRS
        .iter()
        .map(|s| parse_selector_unsafe(s, "CONTENT_REGION_SELECTORS"))
        .collect()
});

/// Pieces extracted from a fetched article page.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    /// Page title (trimmed), or [`FALLBACK_TITLE`]
    pub title: String,
    /// Serialized HTML of the content region (or the raw page)
    pub content_html: String,
    /// Whitespace-normalized text of the content region
    pub content_text: String,
    /// Whitespace-normalized text of the whole document
    pub full_text: String,
}

/// Extracts title, content region, and plain text from a parsed page.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `raw_html` - The raw page body, used when no content region matches
/// * `error_stats` - Processing statistics tracker for extraction warnings
pub fn extract_article(
    document: &Html,
    raw_html: &str,
    error_stats: &ProcessingStats,
) -> ExtractedArticle {
    let title = extract_title(document, error_stats);

    let full_text = normalized_text(document.root_element());

    let (content_html, content_text) = match select_content_region(document) {
        Some(region) => (region.html(), normalized_text(region)),
        None => {
            log::debug!("No content region matched; storing the whole page");
            error_stats.increment_warning(WarningType::MissingContentRegion);
            (raw_html.to_string(), full_text.clone())
        }
    };

    ExtractedArticle {
        title,
        content_html,
        content_text,
        full_text,
    }
}

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element, trimmed. A missing or
/// empty title is counted as a warning and replaced with [`FALLBACK_TITLE`].
pub fn extract_title(document: &Html, error_stats: &ProcessingStats) -> String {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    if title.is_empty() {
        error_stats.increment_warning(WarningType::MissingTitle);
        return FALLBACK_TITLE.to_string();
    }
    title
}

fn select_content_region(document: &Html) -> Option<ElementRef<'_>> {
    CONTENT_REGION_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next())
}

fn normalized_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
