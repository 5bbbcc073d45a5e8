//! Fenced code block detection (``` and ~~~).

use crate::document::indentation;

/// Character a fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceChar {
    Backtick,
    Tilde,
}

impl FenceChar {
    /// The marker character itself.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Backtick => '`',
            Self::Tilde => '~',
        }
    }
}

/// An open fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    /// Leading whitespace before the opening marker.
    pub indent: usize,
    /// Marker character of the opening run.
    pub fence_char: FenceChar,
    /// Length of the opening run (at least 3).
    pub len: usize,
}

/// Parse the marker run at the start of an already left-trimmed line.
fn parse_fence(trimmed_line: &str) -> Option<(FenceChar, usize)> {
    let fence_char = match trimmed_line.as_bytes().first() {
        Some(b'`') => FenceChar::Backtick,
        Some(b'~') => FenceChar::Tilde,
        _ => return None,
    };

    let marker = fence_char.as_char();
    let fence_len = trimmed_line.chars().take_while(|&c| c == marker).count();
    if fence_len >= 3 {
        Some((fence_char, fence_len))
    } else {
        None
    }
}

impl Fence {
    /// Recognise an opening fence line. Anything may follow the marker run
    /// (info string, attributes).
    #[must_use]
    pub fn parse_open(line: &str) -> Option<Self> {
        let (fence_char, len) = parse_fence(line.trim_start())?;
        Some(Self {
            indent: indentation(line),
            fence_char,
            len,
        })
    }

    /// Whether `line` closes this fence: same character, a run at least as
    /// long as the opening one, and nothing but whitespace after it.
    #[must_use]
    pub fn is_closed_by(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match parse_fence(trimmed) {
            Some((fence_char, len)) if fence_char == self.fence_char && len >= self.len => {
                // Marker characters are ASCII, so the run length is a byte offset.
                trimmed[len..].trim().is_empty()
            }
            _ => false,
        }
    }
}
