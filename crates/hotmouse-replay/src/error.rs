//! Error handling for the hotmouse-replay crate.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for replay operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while replaying a script.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// Configuration parsing or resolution errors.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// The script is not valid RON for the step grammar.
    #[error("Failed to parse script: {0}")]
    Script(String),
}
