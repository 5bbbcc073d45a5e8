//! # mkdocs-syntax
//!
//! Linter for MkDocs Material markdown syntax.
//!
//! Catches problems that make MkDocs render silently wrong output (tabs not
//! rendering, admonition content falling outside its container, code blocks
//! breaking) and that `mkdocs build --strict` does not report.
//!
//! The crate separates the **scanner** (a pure function over a document)
//! from the **filesystem strategy** (path expansion, reading, writing back).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use mkdocs_syntax::{check_fs, CheckConfig, FsSourceConfig};
//!
//! let mut fs_config = FsSourceConfig::default();
//! fs_config.paths = vec![PathBuf::from("docs")];
//!
//! let mut check_config = CheckConfig::default();
//! check_config.fix = true;
//!
//! let report = check_fs(&fs_config, &check_config).unwrap();
//! println!("Files checked: {}", report.files_checked);
//! println!("Fixes applied: {}", report.fixes_applied);
//! println!("Manual issues: {}", report.manual_count());
//! ```

mod config;
mod document;
mod error;
mod issue;
pub mod output;
mod report;
pub mod scanner;
mod strategy;

use std::path::Path;

use tracing::{debug, info};

pub use config::{CheckConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE, FsSourceConfig};
pub use document::Document;
pub use error::{CheckError, SkipReason};
pub use issue::{Issue, IssueKind};
pub use report::CheckReport;
pub use scanner::{ScanOutcome, scan_document};

use strategy::fs::{ReadResult, collect_files, read_document, write_document};

/// Check markdown files on disk, fixing them in place when
/// `check_config.fix` is set.
///
/// Files are processed one at a time, in the order `collect_files` yields
/// them. A file is only rewritten when at least one fix was applied to it.
/// Unreadable, oversized and non-UTF-8 files are skipped and counted in
/// `report.files_skipped`.
///
/// # Errors
///
/// Returns an error if an exclude pattern is invalid or a fixed file cannot
/// be written back.
pub fn check_fs(
    fs_config: &FsSourceConfig,
    check_config: &CheckConfig,
) -> Result<CheckReport, CheckError> {
    let files = collect_files(fs_config)?;
    let mut report = CheckReport {
        fix: check_config.fix,
        ..CheckReport::default()
    };

    for file_path in &files {
        let document = match read_document(file_path, fs_config.max_file_size) {
            ReadResult::Ok(document) => document,
            ReadResult::Skipped(reason) => {
                debug!(path = %file_path.display(), %reason, "skipping file");
                report.files_skipped += 1;
                continue;
            }
        };

        let outcome = scan_document(document, file_path, check_config.fix);
        report.files_checked += 1;
        debug!(
            path = %file_path.display(),
            issues = outcome.issues.len(),
            fixes = outcome.fixes_applied,
            "scanned file"
        );

        if check_config.fix && outcome.is_modified() {
            write_document(file_path, &outcome.document)?;
            report.files_modified += 1;
            report.fixes_applied += outcome.fixes_applied;
            debug!(path = %file_path.display(), "wrote fixes");
        }

        report.issues.extend(outcome.issues);
    }

    report.ok = if check_config.fix {
        report.manual_count() == 0
    } else {
        report.issues.is_empty()
    };

    info!(
        files = report.files_found(),
        skipped = report.files_skipped,
        issues = report.issues.len(),
        fixed = report.fixes_applied,
        "check finished"
    );
    Ok(report)
}

/// Scan in-memory markdown text.
///
/// `path` is only used to label issues.
#[must_use]
pub fn check_content(content: &str, path: &Path, fix: bool) -> ScanOutcome {
    scan_document(Document::parse(content), path, fix)
}
