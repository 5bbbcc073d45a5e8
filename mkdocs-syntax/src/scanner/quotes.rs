//! Smart double quote detection and replacement.
//!
//! Only double quotes matter: they delimit tab and admonition titles. Curly
//! single quotes (apostrophes) are harmless inside title text.

/// Curly double quotes that break `===` and `!!!` title delimiters.
pub const SMART_DOUBLE_QUOTES: [char; 4] = [
    '\u{201c}', // left double quotation mark
    '\u{201d}', // right double quotation mark
    '\u{201e}', // double low-9 quotation mark
    '\u{201f}', // double high-reversed-9 quotation mark
];

/// Whether the line contains any smart double quote.
#[must_use]
pub fn has_smart_double_quotes(line: &str) -> bool {
    line.contains(&SMART_DOUBLE_QUOTES[..])
}

/// Replace every smart double quote with a straight `"`.
#[must_use]
pub fn straighten_double_quotes(line: &str) -> String {
    line.replace(&SMART_DOUBLE_QUOTES[..], "\"")
}
