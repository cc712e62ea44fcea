//! Utilities for sanitizing text before storage.
//!
//! Scraped pages occasionally carry NUL bytes and stray control characters
//! that SQLite text columns and log output handle badly. Everything persisted
//! goes through `clean_text` first.

/// Removes NUL bytes and non-whitespace control characters from text.
///
/// Newlines, tabs, and carriage returns are preserved; other characters below
/// 0x20 are dropped. Non-ASCII text passes through untouched.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // printable range starts at space
                || code == 0x09 // tab
                || code == 0x0A // newline
                || code == 0x0D // carriage return
        })
        .collect()
}
