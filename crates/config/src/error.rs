//! Error types for configuration loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
/// Errors produced while loading or parsing a configuration.
pub enum Error {
    #[error("{message}")]
    /// I/O or filesystem read error.
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// Syntax or schema error reported by the JSON or RON parser.
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// 1-based line number, when the parser reports one.
        line: Option<usize>,
        /// 1-based column number, when the parser reports one.
        col: Option<usize>,
        /// Human-readable error message.
        message: String,
    },
    #[error("Unsupported config format: {extension}")]
    /// The file extension does not name a supported format.
    Format {
        /// Path that was requested.
        path: PathBuf,
        /// Offending extension (empty when missing).
        extension: String,
    },
}

impl Error {
    /// Render a human-friendly error message including location when available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => match path {
                Some(p) => format!("Read error at {}: {}", p.display(), message),
                None => format!("Read error: {}", message),
            },
            Self::Parse {
                path,
                line,
                col,
                message,
            } => {
                let loc = match (line, col) {
                    (Some(l), Some(c)) => format!("{}:{}", l, c),
                    (Some(l), None) => format!("{}", l),
                    _ => String::new(),
                };
                match path {
                    Some(p) if !loc.is_empty() => {
                        format!("Config parse error at {}:{}\n{}", p.display(), loc, message)
                    }
                    Some(p) => format!("Config parse error at {}\n{}", p.display(), message),
                    None if !loc.is_empty() => {
                        format!("Config parse error at line {}\n{}", loc, message)
                    }
                    None => format!("Config parse error\n{}", message),
                }
            }
            Self::Format { path, extension } => format!(
                "Unsupported config format '{}' for {} (expected .json or .ron)",
                extension,
                path.display()
            ),
        }
    }

    /// Path associated with this error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path.as_deref(),
            Self::Format { path, .. } => Some(path),
        }
    }
}
