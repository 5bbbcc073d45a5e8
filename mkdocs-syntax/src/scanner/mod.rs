//! Markdown syntax scanner for MkDocs Material block markers.
//!
//! Single forward pass over a document:
//! 1. Fenced code blocks are tracked and their contents are never checked,
//!    except for content escaping an indented fence (found by lookahead at
//!    the moment the fence opens).
//! 2. Tab headers (`=== "Title"`) get quote, blank-line and content
//!    indentation checks.
//! 3. Admonition headers (`!!! type "Title"`) get quote and content
//!    indentation checks.
//!
//! In fix mode quote and blank-line issues are repaired on the document as
//! the scan goes, so line numbers of later issues refer to the fixed text.

pub mod fence;
pub mod line;
pub mod quotes;

use std::path::Path;

use crate::document::{Document, indentation, is_blank};
use crate::issue::{Issue, IssueKind};
use fence::Fence;
use line::{LineKind, classify, is_sibling_block_start};
use quotes::{has_smart_double_quotes, straighten_double_quotes};

/// Extra indentation expected for content under a tab or admonition header.
pub const CONTENT_INDENT: usize = 4;

/// Result of scanning one document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanOutcome {
    /// The document after fixes (identical to the input in check mode).
    pub document: Document,
    /// Issues in document order, then discovery order within a line.
    pub issues: Vec<Issue>,
    /// Number of repairs applied to `document`.
    pub fixes_applied: usize,
}

impl ScanOutcome {
    /// Whether the document differs from the one passed in.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.fixes_applied > 0
    }
}

/// Scan a document for MkDocs Material syntax issues.
///
/// With `fix` set, fixable issues are still reported and are also repaired
/// in the returned document.
#[must_use]
pub fn scan_document(document: Document, path: &Path, fix: bool) -> ScanOutcome {
    let mut scanner = Scanner {
        path,
        fix,
        document,
        issues: Vec::new(),
        fixes_applied: 0,
    };
    scanner.run();
    ScanOutcome {
        document: scanner.document,
        issues: scanner.issues,
        fixes_applied: scanner.fixes_applied,
    }
}

struct Scanner<'a> {
    path: &'a Path,
    fix: bool,
    document: Document,
    issues: Vec<Issue>,
    fixes_applied: usize,
}

impl Scanner<'_> {
    fn run(&mut self) {
        let mut open_fence: Option<Fence> = None;
        let mut index = 0;

        while let Some(line) = self.document.line(index) {
            if let Some(fence) = open_fence {
                if fence.is_closed_by(line) {
                    open_fence = None;
                }
                index += 1;
                continue;
            }

            match classify(line) {
                LineKind::FenceOpen(fence) => {
                    if fence.indent > 0 {
                        self.check_fence_interior(index, fence);
                    }
                    open_fence = Some(fence);
                }
                LineKind::TabHeader { indent } => {
                    index = self.check_tab_header(index, indent);
                }
                LineKind::AdmonitionHeader { indent } => {
                    self.check_admonition_header(index, indent);
                }
                LineKind::Plain => {}
            }
            index += 1;
        }
    }

    fn report(&mut self, index: usize, kind: IssueKind, message: impl Into<String>) {
        self.issues.push(Issue::new(self.path, index + 1, kind, message));
    }

    /// Flag non-blank lines that start at column 0 between an indented
    /// fence and its close.
    fn check_fence_interior(&mut self, open_index: usize, fence: Fence) {
        for (index, line) in self.document.lines().iter().enumerate().skip(open_index + 1) {
            if fence.is_closed_by(line) {
                break;
            }
            if !is_blank(line) && !line.starts_with(' ') {
                self.issues.push(Issue::new(
                    self.path,
                    index + 1,
                    IssueKind::FenceContentAtColumnZero,
                    format!(
                        "code block content at column 0 inside indented fence (fence is at col {})",
                        fence.indent
                    ),
                ));
            }
        }
    }

    /// Returns the index of the last line consumed, which moves past the
    /// header when a blank line was inserted after it.
    fn check_tab_header(&mut self, index: usize, indent: usize) -> usize {
        self.check_title_quotes(index, IssueKind::TabSmartQuotes, "tab");

        let mut header = index;
        if self
            .document
            .line(index + 1)
            .is_some_and(|next| !is_blank(next))
        {
            self.report(
                index,
                IssueKind::TabMissingBlankLine,
                "missing blank line after tab header (=== ...)",
            );
            if self.fix {
                self.document.insert_blank_after(index);
                self.fixes_applied += 1;
                header += 1;
            }
        }

        let expected = indent + CONTENT_INDENT;
        if let Some(content) = self.next_non_blank(header + 1) {
            let actual = self.indentation_at(content);
            if actual < expected {
                self.report(
                    content,
                    IssueKind::TabContentIndent,
                    format!("tab content indented {actual} spaces, expected {expected}"),
                );
            }
        }

        header
    }

    fn check_admonition_header(&mut self, index: usize, indent: usize) {
        self.check_title_quotes(index, IssueKind::AdmonitionSmartQuotes, "admonition");

        let expected = indent + CONTENT_INDENT;
        let Some(content) = self.next_non_blank(index + 1) else {
            return;
        };
        let actual = self.indentation_at(content);
        let sibling = self
            .document
            .line(content)
            .is_some_and(is_sibling_block_start);
        if actual < expected && !sibling {
            self.report(
                content,
                IssueKind::AdmonitionContentIndent,
                format!("admonition content indented {actual} spaces, expected {expected}"),
            );
        }
    }

    fn check_title_quotes(&mut self, index: usize, kind: IssueKind, block: &str) {
        let Some(line) = self.document.line(index) else {
            return;
        };
        if !has_smart_double_quotes(line) {
            return;
        }
        let straightened = self.fix.then(|| straighten_double_quotes(line));

        self.report(
            index,
            kind,
            format!("curly/smart quotes in {block} title (use straight quotes)"),
        );
        if let Some(straightened) = straightened {
            self.document.replace_line(index, straightened);
            self.fixes_applied += 1;
        }
    }

    fn next_non_blank(&self, from: usize) -> Option<usize> {
        self.document
            .lines()
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, line)| !is_blank(line))
            .map(|(index, _)| index)
    }

    fn indentation_at(&self, index: usize) -> usize {
        self.document.line(index).map_or(0, indentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str, fix: bool) -> ScanOutcome {
        scan_document(Document::parse(text), Path::new("test.md"), fix)
    }

    fn messages(outcome: &ScanOutcome) -> Vec<(usize, &str)> {
        outcome
            .issues
            .iter()
            .map(|i| (i.line, i.message.as_str()))
            .collect()
    }

    #[test]
    fn test_clean_document_has_no_issues() {
        let text = "# Title\n\n=== \"Tab A\"\n\n    content\n\n!!! note \"Hi\"\n    body\n";
        let outcome = scan(text, false);
        assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);
    }

    #[test]
    fn test_headers_inside_fence_are_ignored() {
        let text = "```markdown\n=== \u{201c}Tab\u{201d}\ntext\n!!! note\nbody\n```\n";
        let outcome = scan(text, false);
        assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);
    }

    #[test]
    fn test_shorter_or_other_marker_does_not_close_fence() {
        let text = "````\n```\n~~~~\n=== \"A\"\ntext\n````\n";
        let outcome = scan(text, false);
        assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);
    }

    #[test]
    fn test_checks_resume_after_fence_closes() {
        let text = "```\ncode\n```\n!!! note\ncontent\n";
        let outcome = scan(text, false);
        assert_eq!(
            messages(&outcome),
            vec![(5, "admonition content indented 0 spaces, expected 4")]
        );
    }

    #[test]
    fn test_unclosed_fence_swallows_rest_of_document() {
        let text = "```\n!!! note\ncontent\n";
        assert!(scan(text, false).issues.is_empty());
    }

    #[test]
    fn test_tab_header_missing_blank_line_and_indent() {
        let outcome = scan("=== \"Tab A\"\ntext", false);
        assert_eq!(
            messages(&outcome),
            vec![
                (1, "missing blank line after tab header (=== ...)"),
                (2, "tab content indented 0 spaces, expected 4"),
            ]
        );
        assert!(outcome.issues[0].fixable);
        assert!(!outcome.issues[1].fixable);
    }

    #[test]
    fn test_missing_blank_line_fixed_and_idempotent() {
        let outcome = scan("=== \"Tab A\"\n    text\n", true);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].kind, IssueKind::TabMissingBlankLine);
        assert_eq!(outcome.fixes_applied, 1);
        assert_eq!(outcome.document.to_string(), "=== \"Tab A\"\n\n    text\n");

        let rescan = scan(&outcome.document.to_string(), false);
        assert!(rescan.issues.is_empty(), "{:?}", rescan.issues);
    }

    #[test]
    fn test_fix_mode_numbers_lines_against_fixed_document() {
        let outcome = scan("=== \"A\"\n=== \"B\"\n\n    b\n", true);
        assert_eq!(
            messages(&outcome),
            vec![
                (1, "missing blank line after tab header (=== ...)"),
                (3, "tab content indented 0 spaces, expected 4"),
            ]
        );
        assert_eq!(
            outcome.document.to_string(),
            "=== \"A\"\n\n=== \"B\"\n\n    b\n"
        );
    }

    #[test]
    fn test_tab_content_indent_skips_blank_lines() {
        let outcome = scan("=== \"A\"\n\n\ncontent\n", false);
        assert_eq!(
            messages(&outcome),
            vec![(4, "tab content indented 0 spaces, expected 4")]
        );
    }

    #[test]
    fn test_nested_tab_expects_header_indent_plus_four() {
        let outcome = scan("!!! example\n\n    === \"A\"\n\n    text\n", false);
        assert_eq!(
            messages(&outcome),
            vec![(5, "tab content indented 4 spaces, expected 8")]
        );
    }

    #[test]
    fn test_tab_header_at_end_of_document() {
        assert!(scan("=== \"A\"", false).issues.is_empty());
        assert!(scan("=== \"A\"\n", false).issues.is_empty());
    }

    #[test]
    fn test_curly_quotes_in_tab_title() {
        let outcome = scan("=== \u{201c}Don\u{2019}t\u{201d}\n\n    x\n", true);
        assert_eq!(
            messages(&outcome),
            vec![(1, "curly/smart quotes in tab title (use straight quotes)")]
        );
        assert!(outcome.issues[0].fixable);
        assert_eq!(
            outcome.document.line(0),
            Some("=== \"Don\u{2019}t\"")
        );
    }

    #[test]
    fn test_all_smart_double_quotes_replaced() {
        let outcome = scan("!!! note \u{201e}a\u{201f} \u{201c}b\u{201d}\n    body", true);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].kind, IssueKind::AdmonitionSmartQuotes);
        assert_eq!(outcome.document.line(0), Some("!!! note \"a\" \"b\""));
    }

    #[test]
    fn test_apostrophe_alone_is_not_flagged() {
        let text = "=== \"Don\u{2019}t\"\n\n    x\n\n!!! tip \"It\u{2019}s\"\n    y\n";
        assert!(scan(text, false).issues.is_empty());
    }

    #[test]
    fn test_quote_issue_reported_before_blank_line_issue() {
        let outcome = scan("=== \u{201c}A\u{201d}\n    text", false);
        let kinds: Vec<IssueKind> = outcome.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::TabSmartQuotes, IssueKind::TabMissingBlankLine]
        );
    }

    #[test]
    fn test_check_mode_leaves_document_untouched() {
        let text = "=== \u{201c}A\u{201d}\ntext\n";
        let outcome = scan(text, false);
        assert!(!outcome.is_modified());
        assert_eq!(outcome.document.to_string(), text);
    }

    #[test]
    fn test_admonition_content_under_indented() {
        let outcome = scan("!!! note \"Hello\"\ncontent", false);
        assert_eq!(
            messages(&outcome),
            vec![(2, "admonition content indented 0 spaces, expected 4")]
        );
        assert_eq!(outcome.issues[0].kind, IssueKind::AdmonitionContentIndent);
    }

    #[test]
    fn test_admonition_followed_by_admonition() {
        let outcome = scan("!!! note\n!!! warning\n    body\n", false);
        assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);
    }

    #[test]
    fn test_admonition_followed_by_sibling_blocks() {
        for next in ["=== \"Tab\"\n\n    x", "## Heading", "---", "???+ tip\n    x"] {
            let text = format!("!!! note\n\n{next}\n");
            let outcome = scan(&text, false);
            assert!(outcome.issues.is_empty(), "{next}: {:?}", outcome.issues);
        }
    }

    #[test]
    fn test_collapsible_admonition_indentation() {
        let outcome = scan("    ??? info\n    body\n", false);
        assert_eq!(
            messages(&outcome),
            vec![(2, "admonition content indented 4 spaces, expected 8")]
        );
    }

    #[test]
    fn test_indented_fence_content_at_column_zero() {
        let text = "- item\n\n    ```python\n    a = 1\nb = 2\n\n    ```\n";
        let outcome = scan(text, true);
        assert_eq!(
            messages(&outcome),
            vec![(
                5,
                "code block content at column 0 inside indented fence (fence is at col 4)"
            )]
        );
        assert!(!outcome.issues[0].fixable);
        assert!(!outcome.is_modified());
        assert_eq!(outcome.document.to_string(), text);
    }

    #[test]
    fn test_unindented_fence_is_not_checked_for_column_zero() {
        let text = "```\nb = 2\n```\n";
        assert!(scan(text, false).issues.is_empty());
    }

    #[test]
    fn test_column_zero_lookahead_stops_at_close() {
        let text = "  ~~~\n  ok\n  ~~~\nafter\n";
        assert!(scan(text, false).issues.is_empty());
    }

    #[test]
    fn test_fix_twice_is_idempotent() {
        let text = concat!(
            "=== \u{201c}One\u{201d}\n",
            "    one\n",
            "=== \"Two\"\n",
            "two\n",
            "!!! note \u{201c}Hi\u{201d}\n",
            "    body\n",
        );
        let first = scan(text, true);
        assert_eq!(first.fixes_applied, 4);

        let fixed = first.document.to_string();
        let second = scan(&fixed, true);
        assert_eq!(second.fixes_applied, 0);
        assert_eq!(second.document.to_string(), fixed);
        assert!(second.issues.iter().all(|i| !i.fixable));
    }
}
