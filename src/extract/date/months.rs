//! Month-name lookup tables.
//!
//! Static mappings from localized month names to their numeric value,
//! constructed once for the process lifetime. Polish entries are the genitive
//! forms that appear in running text ("28 października 2025").

/// Polish genitive month names, in calendar order.
pub const POLISH_MONTHS: &[(&str, u32)] = &[
    ("stycznia", 1),
    ("lutego", 2),
    ("marca", 3),
    ("kwietnia", 4),
    ("maja", 5),
    ("czerwca", 6),
    ("lipca", 7),
    ("sierpnia", 8),
    ("września", 9),
    ("października", 10),
    ("listopada", 11),
    ("grudnia", 12),
];

/// English month names, in calendar order.
pub const ENGLISH_MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Looks up a month name in a table, case-insensitively.
///
/// Returns the numeric month (1-12), or `None` if the name is not in the
/// table. Unknown names are a strategy non-match, never an error.
pub fn month_number(table: &[(&str, u32)], name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    table
        .iter()
        .find(|(month_name, _)| *month_name == lowered)
        .map(|(_, number)| *number)
}
