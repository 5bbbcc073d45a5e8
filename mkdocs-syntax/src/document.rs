//! In-memory markdown document as an ordered list of lines.

use std::fmt;

/// A markdown document split into lines.
///
/// Lines are split on `\n` only: a trailing newline produces a final empty
/// line and carriage returns stay attached to their line, so rendering the
/// document reproduces the original text byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split text into a document.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// All lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    ///
    /// A document parsed from empty text still has one empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at a 0-based index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Replace the line at a 0-based index. Out-of-range indices are ignored.
    pub fn replace_line(&mut self, index: usize, line: String) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line;
        }
    }

    /// Insert an empty line directly after the line at `index`.
    pub fn insert_blank_after(&mut self, index: usize) {
        let at = (index + 1).min(self.lines.len());
        self.lines.insert(at, String::new());
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Whether a line contains only whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Number of leading whitespace characters (a tab counts as one).
#[must_use]
pub fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
