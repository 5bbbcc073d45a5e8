//! Error types for MkDocs syntax checking.
//!
//! Unreadable input files are not errors: they are skipped and counted in
//! the report. Only conditions that make the run itself unreliable end up
//! here.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors of a check run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// An exclude glob pattern could not be parsed.
    #[error("Invalid exclude glob pattern '{pattern}': {source}")]
    InvalidExclude {
        pattern: String,
        source: glob::PatternError,
    },

    /// A fixed document could not be written back.
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Why a collected file was not scanned.
#[derive(Debug)]
#[non_exhaustive]
pub enum SkipReason {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// The file exceeded the configured maximum size.
    TooLarge { max_file_size: u64 },
    /// The file content is not valid UTF-8.
    InvalidEncoding,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read file: {e}"),
            Self::TooLarge { max_file_size } => {
                write!(f, "file exceeds maximum size of {max_file_size} bytes")
            }
            Self::InvalidEncoding => write!(f, "file is not valid UTF-8"),
        }
    }
}
