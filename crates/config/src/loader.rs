//! Parse and load user configuration.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{Config, Error};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON, the add-on's native configuration format.
    Json,
    /// RON.
    Ron,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(OsStr::to_str) {
            Some("json") => Ok(Self::Json),
            Some("ron") => Ok(Self::Ron),
            other => Err(Error::Format {
                path: path.to_path_buf(),
                extension: other.unwrap_or_default().to_string(),
            }),
        }
    }
}

/// Load a `Config` from a `.json` or `.ron` file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    parse(&text, format, Some(path.to_path_buf()))
}

/// Parse a `Config` from text in the given format.
pub fn load_from_str(text: &str, format: Format) -> Result<Config, Error> {
    parse(text, format, None)
}

/// Parse, then report validation warnings through tracing.
fn parse(text: &str, format: Format, path: Option<PathBuf>) -> Result<Config, Error> {
    let cfg: Config = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| Error::Parse {
            line: Some(e.line()),
            col: Some(e.column()),
            message: e.to_string(),
            path: path.clone(),
        })?,
        Format::Ron => ron::from_str(text).map_err(|e| Error::Parse {
            line: None,
            col: None,
            message: e.to_string(),
            path: path.clone(),
        })?,
    };
    for w in cfg.validate() {
        warn!(key = %w.key(), "{}", w);
    }
    debug!(
        shortcuts = cfg.shortcuts.len(),
        path = ?path,
        "config_loaded"
    );
    Ok(cfg)
}
