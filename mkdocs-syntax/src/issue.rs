//! Issues reported by the syntax scanner.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// The rule an issue was raised by.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueKind {
    /// Curly double quotes in a `===` tab title.
    TabSmartQuotes,
    /// A `===` tab header directly followed by content.
    TabMissingBlankLine,
    /// Tab content indented less than header + 4.
    TabContentIndent,
    /// Curly double quotes in a `!!!`/`???` admonition title.
    AdmonitionSmartQuotes,
    /// Admonition content indented less than header + 4.
    AdmonitionContentIndent,
    /// Code at column 0 inside an indented fence.
    FenceContentAtColumnZero,
}

impl IssueKind {
    /// Whether the scanner can repair this kind of issue mechanically.
    ///
    /// Indentation problems are never fixable: re-indenting nested content
    /// needs a full block parser.
    #[must_use]
    pub const fn is_fixable(self) -> bool {
        matches!(
            self,
            Self::TabSmartQuotes | Self::TabMissingBlankLine | Self::AdmonitionSmartQuotes
        )
    }
}

/// A single issue found in a markdown file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Issue {
    /// File the issue was found in
    pub file: PathBuf,
    /// Line number (1-indexed)
    pub line: usize,
    /// Rule that raised the issue
    pub kind: IssueKind,
    /// Human-readable description
    pub message: String,
    /// Whether `--fix` repairs it
    pub fixable: bool,
}

impl Issue {
    /// Create an issue; fixability follows from the kind.
    #[must_use]
    pub fn new(file: &Path, line: usize, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            file: file.to_owned(),
            line,
            kind,
            message: message.into(),
            fixable: kind.is_fixable(),
        }
    }

    /// Format the issue for human-readable output.
    ///
    /// `{file}:{line}: {message}`, with ` [auto-fixable]` appended for fixable issues.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let tag = if self.fixable { " [auto-fixable]" } else { "" };
        format!(
            "{}:{}: {}{}",
            self.file.display(),
            self.line,
            self.message,
            tag
        )
    }
}
