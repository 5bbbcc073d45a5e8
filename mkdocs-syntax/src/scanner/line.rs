//! Line classification.
//!
//! Each line outside a fence is one of a fixed set of kinds, tested in
//! priority order: fence, tab header, admonition header.

use std::sync::LazyLock;

use regex::Regex;

use super::fence::Fence;

/// `=== "Tab Title"` at any indentation.
static TAB_HEADER: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(\s*)===\s+.") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid tab header regex: {err}"),
});

/// `!!! note`, `??? note` or `???+ note` at any indentation.
static ADMONITION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(\s*)(?:!{3}|\?{3}\+?)\s+\w+") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid admonition header regex: {err}"),
    });

/// What a line starts, as far as the scanner is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opening line of a fenced code block.
    FenceOpen(Fence),
    /// Tabbed content header (`=== "Title"`).
    TabHeader { indent: usize },
    /// Admonition header (`!!! type "Title"`).
    AdmonitionHeader { indent: usize },
    /// Anything else.
    Plain,
}

fn header_indent(regex: &Regex, line: &str) -> Option<usize> {
    regex
        .captures(line)
        .map(|caps| caps.get(1).map_or(0, |m| m.as_str().chars().count()))
}

/// Classify a line that is not inside a fence.
#[must_use]
pub fn classify(line: &str) -> LineKind {
    if let Some(fence) = Fence::parse_open(line) {
        LineKind::FenceOpen(fence)
    } else if let Some(indent) = header_indent(&TAB_HEADER, line) {
        LineKind::TabHeader { indent }
    } else if let Some(indent) = header_indent(&ADMONITION_HEADER, line) {
        LineKind::AdmonitionHeader { indent }
    } else {
        LineKind::Plain
    }
}

#[must_use]
pub fn is_tab_header(line: &str) -> bool {
    TAB_HEADER.is_match(line)
}

#[must_use]
pub fn is_admonition_header(line: &str) -> bool {
    ADMONITION_HEADER.is_match(line)
}

/// Lines that may legitimately follow an admonition header at the outer
/// indentation: another tab or admonition, a heading, or a horizontal rule.
#[must_use]
pub fn is_sibling_block_start(line: &str) -> bool {
    let trimmed = line.trim();
    is_tab_header(line)
        || is_admonition_header(line)
        || trimmed.starts_with('#')
        || trimmed.starts_with("---")
}
