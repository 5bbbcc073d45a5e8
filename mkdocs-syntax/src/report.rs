//! Check report types.

use serde::Serialize;

use crate::issue::Issue;

/// Result of a check run over a set of files.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Whether fixable issues were repaired in place.
    pub fix: bool,
    /// Number of files read and scanned.
    pub files_checked: usize,
    /// Number of collected files that could not be read (skipped silently).
    pub files_skipped: usize,
    /// Number of files written back with fixes.
    pub files_modified: usize,
    /// Number of repairs applied across all files.
    pub fixes_applied: usize,
    /// Whether nothing is left to do: no issues in check mode, no manual
    /// issues in fix mode.
    pub ok: bool,
    /// All issues, in file order then document order.
    pub issues: Vec<Issue>,
}

impl CheckReport {
    /// Total number of markdown files found (checked + skipped).
    #[must_use]
    pub fn files_found(&self) -> usize {
        self.files_checked + self.files_skipped
    }

    /// Number of issues `--fix` can repair.
    #[must_use]
    pub fn fixable_count(&self) -> usize {
        self.issues.iter().filter(|i| i.fixable).count()
    }

    /// Number of issues that need manual attention.
    #[must_use]
    pub fn manual_count(&self) -> usize {
        self.issues.len() - self.fixable_count()
    }

    /// Issues that need manual attention, in report order.
    pub fn manual_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.fixable)
    }
}
