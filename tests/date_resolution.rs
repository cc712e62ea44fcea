//! Date-resolution contract tests.
//!
//! Exercises the publication-date cascade through the public API with a
//! pinned clock, covering the priority ordering, each pattern tier, and the
//! totality guarantee.

use article_harvester::{resolve_publication_date, resolve_publication_date_at};
use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use scraper::Html;

fn empty_doc() -> Html {
    Html::parse_document("<html></html>")
}

fn pinned_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 4, 15, 30, 45).unwrap()
}

#[test]
fn resolver_is_total_on_empty_inputs() {
    let result = resolve_publication_date_at(&empty_doc(), "", pinned_now());
    // No signal at all resolves to "now" truncated to midnight
    assert_eq!(result, Utc.with_ymd_and_hms(2025, 11, 4, 0, 0, 0).unwrap());
}

#[test]
fn metadata_beats_iso_text() {
    let doc = Html::parse_document(
        r#"<html><head><meta property="article:published_time" content="2025-10-28T12:00:00Z"></head></html>"#,
    );
    let result = resolve_publication_date_at(&doc, "some text with 2020-01-01 in it", pinned_now());
    assert_eq!(result, Utc.with_ymd_and_hms(2025, 10, 28, 12, 0, 0).unwrap());
}

#[test]
fn polish_month_name_maps_to_numeric_month() {
    let result = resolve_publication_date_at(&empty_doc(), "28 października 2025", pinned_now());
    assert_eq!(result, Utc.with_ymd_and_hms(2025, 10, 28, 0, 0, 0).unwrap());
}

#[test]
fn english_month_name_maps_to_numeric_month() {
    let result = resolve_publication_date_at(&empty_doc(), "October 28, 2025", pinned_now());
    assert_eq!(result, Utc.with_ymd_and_hms(2025, 10, 28, 0, 0, 0).unwrap());
}

#[test]
fn bare_iso_date_is_parsed_at_midnight() {
    let result = resolve_publication_date_at(&empty_doc(), "2025-10-28", pinned_now());
    assert_eq!(result, Utc.with_ymd_and_hms(2025, 10, 28, 0, 0, 0).unwrap());
}

#[test]
fn relative_time_subtracts_from_now_with_full_precision() {
    let now = pinned_now();
    let result = resolve_publication_date_at(&empty_doc(), "2 days ago", now);
    assert_eq!(result, now - Duration::days(2));
    // NOT truncated to midnight
    assert_ne!(result.hour(), 0);
}

#[test]
fn yesterday_is_previous_day_at_midnight() {
    let result = resolve_publication_date_at(&empty_doc(), "Posted yesterday", pinned_now());
    assert_eq!(result, Utc.with_ymd_and_hms(2025, 11, 3, 0, 0, 0).unwrap());
}

#[test]
fn meta_tag_wins_regardless_of_text() {
    let doc = Html::parse_document(
        r#"<html><head><meta property="article:published_time" content="2025-10-28T12:00:00Z"></head></html>"#,
    );
    for text in ["", "5 marca 2020", "January 1, 1999", "3 hours ago", "yesterday"] {
        let result = resolve_publication_date_at(&doc, text, pinned_now());
        assert_eq!(
            result,
            Utc.with_ymd_and_hms(2025, 10, 28, 12, 0, 0).unwrap(),
            "text {text:?} must not override metadata"
        );
    }
}

#[test]
fn malformed_iso_shape_does_not_panic_and_falls_through() {
    let result = resolve_publication_date_at(&empty_doc(), "2025-13-40", pinned_now());
    // Calendar-invalid match falls through to the final fallback
    assert_eq!(result, Utc.with_ymd_and_hms(2025, 11, 4, 0, 0, 0).unwrap());
}

#[test]
fn strategy_order_is_polish_english_iso() {
    // All three text tiers present: the Polish tier wins
    let text = "1 stycznia 2021, March 2, 2022, 2023-03-03";
    let result = resolve_publication_date_at(&empty_doc(), text, pinned_now());
    assert_eq!(result, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());

    // Without the Polish date, the English tier wins
    let text = "March 2, 2022, 2023-03-03";
    let result = resolve_publication_date_at(&empty_doc(), text, pinned_now());
    assert_eq!(result, Utc.with_ymd_and_hms(2022, 3, 2, 0, 0, 0).unwrap());
}

#[test]
fn ambient_clock_variant_returns_midnight_for_no_signal() {
    let result = resolve_publication_date(&empty_doc(), "");
    assert_eq!(result.hour(), 0);
    assert_eq!(result.minute(), 0);
    assert_eq!(result.second(), 0);
    assert!(result <= Utc::now());
}
