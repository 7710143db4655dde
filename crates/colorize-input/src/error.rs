//! Error types for input reading.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The underlying reader failed.
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),

    /// A file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is not valid UTF-8.
    #[error("Line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}
