//! Heuristic publication-date resolution.
//!
//! Articles in the wild rarely carry one reliable date signal, so resolution
//! runs a strict priority cascade over the parsed document and its plain-text
//! rendering:
//!
//! 1. Structured metadata (`article:published_time`, `publish-date`, `date`
//!    meta tags, then `<time>`)
//! 2. Polish month-name pattern ("28 października 2025")
//! 3. English month-name pattern ("October 28, 2025")
//! 4. Bare ISO date ("2025-10-28")
//! 5. Relative time ("2 days ago")
//! 6. The word "yesterday"
//! 7. Fallback: now, truncated to midnight
//!
//! Each strategy is an independent function returning `Option`; the first hit
//! wins. A match that fails to parse (invalid calendar date, numeric
//! overflow) counts as a non-match and the cascade continues, so resolution
//! is total: it always produces a timezone-aware UTC timestamp.

mod months;
mod parse;

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use regex::Regex;
use scraper::{Html, Selector};

use crate::utils::parse_selector_unsafe;
use months::{month_number, ENGLISH_MONTHS, POLISH_MONTHS};
use parse::parse_datetime_lenient;

// Metadata candidates, in priority order
const META_PUBLISHED_TIME_SELECTOR_STR: &str = r#"meta[property="article:published_time"]"#;
const META_PUBLISH_DATE_SELECTOR_STR: &str = r#"meta[name="publish-date"]"#;
const META_DATE_SELECTOR_STR: &str = r#"meta[name="date"]"#;
const TIME_SELECTOR_STR: &str = "time";

static METADATA_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        META_PUBLISHED_TIME_SELECTOR_STR,
        META_PUBLISH_DATE_SELECTOR_STR,
        META_DATE_SELECTOR_STR,
        TIME_SELECTOR_STR,
    ]
    .iter()
    .map(|s| parse_selector_unsafe(s, "METADATA_SELECTORS"))
    .collect()
});

/// Compiles a static regex pattern, panicking with context on failure.
///
/// Panics only for malformed hardcoded patterns (a programming error).
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static POLISH_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = POLISH_MONTHS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("|");
    compile_regex_unsafe(
        &format!(r"(?i)(\d{{1,2}})\s+({alternation})\s+(\d{{4}})"),
        "POLISH_DATE_RE",
    )
});

static ENGLISH_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),?\s+(\d{4})",
        "ENGLISH_DATE_RE",
    )
});

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(\d{4})-(\d{2})-(\d{2})", "ISO_DATE_RE"));

static RELATIVE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)(\d+)\s+(second|minute|hour|day)s?\s+ago", "RELATIVE_TIME_RE")
});

static YESTERDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)\byesterday\b", "YESTERDAY_RE"));

/// Resolves the publication date of an article.
///
/// Reads the ambient clock once; see [`resolve_publication_date_at`] for the
/// clock-injected variant used in tests.
pub fn resolve_publication_date(document: &Html, text: &str) -> DateTime<Utc> {
    resolve_publication_date_at(document, text, Utc::now())
}

/// Resolves the publication date against a pinned "now".
///
/// Never fails: if no strategy matches, returns `now` truncated to midnight.
/// All returned timestamps are UTC and truncated to whole seconds.
pub fn resolve_publication_date_at(
    document: &Html,
    text: &str,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    from_metadata(document)
        .or_else(|| from_polish_month(text))
        .or_else(|| from_english_month(text))
        .or_else(|| from_iso_date(text))
        .or_else(|| from_relative_time(text, now))
        .or_else(|| from_yesterday(text, now))
        .unwrap_or_else(|| truncate_to_midnight(now))
}

/// Strategy 1: structured metadata lookup.
///
/// Each candidate element contributes exactly one date string (`content`
/// attribute, else `datetime` attribute, else inner text). The first
/// candidate whose string parses wins; a candidate whose string fails to
/// parse is skipped without retrying its other attributes.
fn from_metadata(document: &Html) -> Option<DateTime<Utc>> {
    for selector in METADATA_SELECTORS.iter() {
        let Some(element) = document.select(selector).next() else {
            continue;
        };

        let value = element.value();
        let date_str = value
            .attr("content")
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .or_else(|| {
                value
                    .attr("datetime")
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
            })
            .or_else(|| {
                let inner: String = element.text().collect();
                let trimmed = inner.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            });

        let Some(date_str) = date_str else {
            continue;
        };

        if let Some(parsed) = parse_datetime_lenient(&date_str) {
            log::debug!("Resolved publication date from metadata: {}", parsed);
            return Some(truncate_to_second(parsed));
        }
    }
    None
}

/// Strategy 2: "28 października 2025" (leftmost match wins).
fn from_polish_month(text: &str) -> Option<DateTime<Utc>> {
    let caps = POLISH_DATE_RE.captures(text)?;
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = month_number(POLISH_MONTHS, caps.get(2)?.as_str())?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    midnight_utc(year, month, day)
}

/// Strategy 3: "October 28, 2025" (comma optional, leftmost match wins).
fn from_english_month(text: &str) -> Option<DateTime<Utc>> {
    let caps = ENGLISH_DATE_RE.captures(text)?;
    let month = month_number(ENGLISH_MONTHS, caps.get(1)?.as_str())?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    midnight_utc(year, month, day)
}

/// Strategy 4: bare "YYYY-MM-DD" substring.
///
/// Only the leftmost match is considered; a shape-valid but calendar-invalid
/// match ("2025-13-40") makes the whole strategy a non-match.
fn from_iso_date(text: &str) -> Option<DateTime<Utc>> {
    let caps = ISO_DATE_RE.captures(text)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    midnight_utc(year, month, day)
}

/// Strategy 5: "<n> <unit>(s) ago".
///
/// The only strategy that keeps time-of-day precision: the result is
/// `now - n × unit` to the second, not truncated to midnight.
fn from_relative_time(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = RELATIVE_TIME_RE.captures(text)?;
    let amount: i64 = caps.get(1)?.as_str().parse().ok()?;
    let seconds = match caps.get(2)?.as_str().to_lowercase().as_str() {
        "second" => amount,
        "minute" => amount.checked_mul(60)?,
        "hour" => amount.checked_mul(3_600)?,
        "day" => amount.checked_mul(86_400)?,
        _ => return None,
    };
    let delta = Duration::try_seconds(seconds)?;
    now.checked_sub_signed(delta).map(truncate_to_second)
}

/// Strategy 6: the word "yesterday" anywhere in the text.
fn from_yesterday(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if !YESTERDAY_RE.is_match(text) {
        return None;
    }
    now.checked_sub_signed(Duration::days(1))
        .map(truncate_to_midnight)
}

fn midnight_utc(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

fn truncate_to_midnight(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(instant)
}

fn truncate_to_second(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.with_nanosecond(0).unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pinned_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 4, 15, 30, 45).unwrap()
    }

    fn empty_doc() -> Html {
        Html::parse_document("<html></html>")
    }

    fn ymd(dt: &DateTime<Utc>) -> String {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    #[test]
    fn test_meta_published_time_wins() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="article:published_time" content="2025-10-28T12:00:00Z"></head></html>"#,
        );
        let result = resolve_publication_date_at(&doc, "irrelevant", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 12:00:00");
    }

    #[test]
    fn test_meta_beats_iso_text() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="article:published_time" content="2025-10-28T12:00:00Z"></head></html>"#,
        );
        let result = resolve_publication_date_at(&doc, "published 2020-01-01", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 12:00:00");
    }

    #[test]
    fn test_meta_candidate_order() {
        // publish-date outranks the plain date meta tag
        let doc = Html::parse_document(
            r#"<html><head>
                <meta name="date" content="2020-01-01">
                <meta name="publish-date" content="2025-10-28">
            </head></html>"#,
        );
        let result = resolve_publication_date_at(&doc, "", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_meta_unparseable_falls_to_next_candidate() {
        let doc = Html::parse_document(
            r#"<html><head>
                <meta property="article:published_time" content="soon">
                <meta name="date" content="2025-10-28">
            </head></html>"#,
        );
        let result = resolve_publication_date_at(&doc, "", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_meta_empty_content_falls_back_to_datetime_attr() {
        let doc = Html::parse_document(
            r#"<html><body><time datetime="2025-10-28T09:15:00Z">last week</time></body></html>"#,
        );
        let result = resolve_publication_date_at(&doc, "", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 09:15:00");
    }

    #[test]
    fn test_time_element_inner_text() {
        let doc = Html::parse_document(
            r#"<html><body><time>2025-10-28</time></body></html>"#,
        );
        let result = resolve_publication_date_at(&doc, "", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_meta_unparseable_string_skips_candidate_entirely() {
        // content is present but junk; the datetime attribute must NOT be
        // retried on the same candidate
        let doc = Html::parse_document(
            r#"<html><body><time datetime="2025-10-28T09:15:00Z" content="junk">junk</time></body></html>"#,
        );
        let result = resolve_publication_date_at(&doc, "2024-05-05", pinned_now());
        // the content attribute is selected first and fails to parse, so the
        // whole candidate is skipped and the ISO text match wins
        assert_eq!(ymd(&result), "2024-05-05 00:00:00");
    }

    #[test]
    fn test_polish_month_pattern() {
        let result =
            resolve_publication_date_at(&empty_doc(), "Opublikowano 28 października 2025 r.", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_polish_month_pattern_case_insensitive() {
        let result =
            resolve_publication_date_at(&empty_doc(), "3 MAJA 2024", pinned_now());
        assert_eq!(ymd(&result), "2024-05-03 00:00:00");
    }

    #[test]
    fn test_english_month_pattern() {
        let result = resolve_publication_date_at(&empty_doc(), "October 28, 2025", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_english_month_pattern_without_comma() {
        let result = resolve_publication_date_at(&empty_doc(), "Posted October 28 2025", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_iso_pattern() {
        let result = resolve_publication_date_at(&empty_doc(), "released 2025-10-28 worldwide", pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_iso_leftmost_match_wins() {
        let result =
            resolve_publication_date_at(&empty_doc(), "2024-01-02 updated 2025-10-28", pinned_now());
        assert_eq!(ymd(&result), "2024-01-02 00:00:00");
    }

    #[test]
    fn test_polish_beats_english_and_iso() {
        let text = "2020-02-02 January 3, 2021 i 28 października 2025";
        let result = resolve_publication_date_at(&empty_doc(), text, pinned_now());
        assert_eq!(ymd(&result), "2025-10-28 00:00:00");
    }

    #[test]
    fn test_relative_time_days() {
        let result = resolve_publication_date_at(&empty_doc(), "2 days ago", pinned_now());
        assert_eq!(ymd(&result), "2025-11-02 15:30:45");
    }

    #[test]
    fn test_relative_time_hours_keeps_precision() {
        let result = resolve_publication_date_at(&empty_doc(), "Posted 3 hours ago", pinned_now());
        assert_eq!(ymd(&result), "2025-11-04 12:30:45");
    }

    #[test]
    fn test_relative_time_singular_unit() {
        let result = resolve_publication_date_at(&empty_doc(), "1 minute ago", pinned_now());
        assert_eq!(ymd(&result), "2025-11-04 15:29:45");
    }

    #[test]
    fn test_relative_time_overflow_is_nonmatch() {
        // Astronomically large counts must fall through, not panic
        let result = resolve_publication_date_at(
            &empty_doc(),
            "9000000000000000000 days ago",
            pinned_now(),
        );
        assert_eq!(ymd(&result), "2025-11-04 00:00:00");
    }

    #[test]
    fn test_yesterday_keyword() {
        let result = resolve_publication_date_at(&empty_doc(), "Posted Yesterday", pinned_now());
        assert_eq!(ymd(&result), "2025-11-03 00:00:00");
    }

    #[test]
    fn test_yesterday_requires_word_boundary() {
        let result =
            resolve_publication_date_at(&empty_doc(), "yesterdays news is old", pinned_now());
        // "yesterdays" has no right word boundary after the token, so this
        // is a non-match and the fallback applies
        assert_eq!(ymd(&result), "2025-11-04 00:00:00");
    }

    #[test]
    fn test_no_signal_fallback_is_today_midnight() {
        let result = resolve_publication_date_at(&empty_doc(), "", pinned_now());
        assert_eq!(ymd(&result), "2025-11-04 00:00:00");
    }

    #[test]
    fn test_malformed_iso_falls_through_to_relative() {
        let result =
            resolve_publication_date_at(&empty_doc(), "2025-13-40 spotted 2 hours ago", pinned_now());
        assert_eq!(ymd(&result), "2025-11-04 13:30:45");
    }

    #[test]
    fn test_malformed_iso_falls_through_to_fallback() {
        let result = resolve_publication_date_at(&empty_doc(), "2025-13-40", pinned_now());
        assert_eq!(ymd(&result), "2025-11-04 00:00:00");
    }

    #[test]
    fn test_totality_on_adversarial_inputs() {
        let inputs = [
            "",
            "\0\0\0",
            "99 czerwca 0000",
            "February 30, 2025",
            "0000-00-00",
            "18446744073709551616 seconds ago",
            "yesterday yesterday yesterday",
        ];
        for input in inputs {
            // Must never panic; value itself is whatever the cascade yields
            let _ = resolve_publication_date_at(&empty_doc(), input, pinned_now());
        }
    }

    #[test]
    fn test_ambient_clock_entry_point() {
        let before = Utc::now();
        let result = resolve_publication_date(&empty_doc(), "");
        // Fallback path: today's midnight, never in the future
        assert!(result <= before + Duration::days(1));
        assert_eq!(result.format("%H:%M:%S").to_string(), "00:00:00");
    }
}
