//! Configuration types for MkDocs syntax checking.
//!
//! Split into the core check config (what to do with each document) and the
//! source config (how documents are discovered on disk).

use std::path::PathBuf;

/// Default maximum size of a single markdown file (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Default maximum directory traversal depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Core check config, independent of where content comes from.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Repair fixable issues (smart quotes, missing blank lines) in place.
    pub fix: bool,
}

/// Filesystem-specific source options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Files or directories to check. Directories are searched recursively
    /// for `.md` files; other files are used only if they end in `.md`.
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format), matched against the full path and
    /// the file name.
    pub exclude: Vec<String>,
    /// Files larger than this are skipped (default: 10 MiB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links while walking directories.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            follow_links: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
