//! Fatal scan errors
//!
//! The only conditions that abort a scan: the corpus directory or one of
//! its files cannot be read. Everything else (malformed metadata, unknown
//! statuses, dangling references) is a diagnostic, and the scan never
//! aborts because of a single malformed document.

use std::path::PathBuf;

/// Fatal conditions aborting a corpus scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root is not a directory
    #[error("corpus root is not a directory: {path}")]
    NotADirectory {
        /// The offending path
        path: PathBuf,
    },

    /// Directory traversal failed
    #[error("failed to walk corpus directory {path}: {source}")]
    Walk {
        /// The scan root
        path: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// A document could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// The offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid UTF-8 text
    #[error("file is not valid utf-8: {path}")]
    Decode {
        /// The offending file
        path: PathBuf,
    },
}

impl ScanError {
    /// Create an IO error for a path
    ///
    /// Non-UTF-8 content surfaces as [`ScanError::Decode`] so the message
    /// names the real problem instead of a generic read failure.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            return Self::Decode { path };
        }
        Self::Io { path, source }
    }
}
