//! Output writing.
//!
//! Stage 4 of the book-index pipeline: persist the rendered document text,
//! overwriting any existing file. The single `fs::write` here is the only
//! externally observable side effect of a run.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Filename used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "generated-index.html";

/// Write `document` to `path`, or to [`DEFAULT_OUTPUT`] in the current
/// directory when no path is given. Returns the path actually written.
pub fn write_document(document: &str, path: Option<&Path>) -> Result<PathBuf, WriteError> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(DEFAULT_OUTPUT),
    };
    fs::write(&target, document)?;
    Ok(target)
}
