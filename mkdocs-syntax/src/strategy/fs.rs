//! Filesystem document source.
//!
//! Expands path arguments to markdown files, reads them with a bounded read
//! and writes fixed documents back in place.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::FsSourceConfig;
use crate::document::Document;
use crate::error::{CheckError, SkipReason};

/// Result of attempting to read a file for scanning.
pub enum ReadResult {
    /// File was read successfully.
    Ok(Document),
    /// File could not be read and is skipped.
    Skipped(SkipReason),
}

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

/// Check if file has the markdown extension (case-sensitive, like the `.md` suffix test).
fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

fn compile_excludes(exclude: &[String]) -> Result<Vec<Pattern>, CheckError> {
    exclude
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| CheckError::InvalidExclude {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Markdown files below a directory, in lexical path order.
fn walk_markdown_files(
    root: &Path,
    config: &FsSourceConfig,
    exclude_patterns: &[Pattern],
) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for entry_result in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                debug!(root = %root.display(), error = %walk_err, "skipping unreadable entry");
                continue;
            }
        };

        let file_path = entry.path();
        // `is_file` follows the link, so symlinked pages are kept even when
        // `follow_links` leaves symlinked directories unvisited.
        if !file_path.is_file() || !is_markdown(file_path) {
            continue;
        }
        if matches_exclude(file_path, exclude_patterns) {
            debug!(path = %file_path.display(), "excluded");
            continue;
        }
        found.push(file_path.to_path_buf());
    }

    found.sort();
    found
}

/// Expand the configured paths to the list of markdown files to check.
///
/// Paths are processed in order. A directory contributes every `.md` file
/// below it, sorted; a file contributes itself if it ends in `.md`. Anything
/// else, including paths that do not exist, is skipped. Duplicates keep
/// their first position.
///
/// # Errors
///
/// Returns `CheckError::InvalidExclude` if an exclude pattern is not a valid glob.
pub fn collect_files(config: &FsSourceConfig) -> Result<Vec<PathBuf>, CheckError> {
    let exclude_patterns = compile_excludes(&config.exclude)?;
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for root in &config.paths {
        let candidates = if root.is_dir() {
            walk_markdown_files(root, config, &exclude_patterns)
        } else if root.is_file() && is_markdown(root) && !matches_exclude(root, &exclude_patterns)
        {
            vec![root.clone()]
        } else {
            debug!(path = %root.display(), "not a markdown file or directory, skipping");
            continue;
        };

        for file in candidates {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    Ok(files)
}

/// Read a file using a bounded read, enforcing `max_file_size`.
///
/// Reads at most `max_file_size + 1` bytes so an oversized file is detected
/// without loading all of it.
#[must_use]
pub fn read_document(path: &Path, max_file_size: u64) -> ReadResult {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => return ReadResult::Skipped(SkipReason::Io(e)),
    };

    let mut buffer = Vec::new();
    if let Err(e) = file
        .take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
    {
        return ReadResult::Skipped(SkipReason::Io(e));
    }

    if buffer.len() as u64 > max_file_size {
        return ReadResult::Skipped(SkipReason::TooLarge { max_file_size });
    }

    match String::from_utf8(buffer) {
        Ok(content) => ReadResult::Ok(Document::parse(&content)),
        Err(_) => ReadResult::Skipped(SkipReason::InvalidEncoding),
    }
}

/// Overwrite a file with the rendered document.
///
/// # Errors
///
/// Returns `CheckError::Write` if the file cannot be written.
pub fn write_document(path: &Path, document: &Document) -> Result<(), CheckError> {
    std::fs::write(path, document.to_string()).map_err(|source| CheckError::Write {
        path: path.to_owned(),
        source,
    })
}
