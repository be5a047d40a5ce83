//! Markdown source loading.
//!
//! The core crates only ever see the final string; everything filesystem
//! lives here, with failures classified for reporting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Upper bound on input size. Markdown sources beyond this are refused
/// rather than read into memory.
pub const MAX_SOURCE_BYTES: u64 = 16 * 1024 * 1024;

/// Errors raised while loading a source file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("no such file: {0}")]
    NotFound(PathBuf),

    /// The file exists but is not readable.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The file exceeds [`MAX_SOURCE_BYTES`].
    #[error("{path} is {size} bytes, over the {limit}-byte limit")]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Any other I/O failure.
    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a source file to a string, enforcing the size ceiling.
pub fn load_source(path: &Path) -> Result<String, LoadError> {
    let metadata = fs::metadata(path).map_err(|e| classify(path, e))?;
    if metadata.len() > MAX_SOURCE_BYTES {
        return Err(LoadError::TooLarge {
            path: path.to_owned(),
            size: metadata.len(),
            limit: MAX_SOURCE_BYTES,
        });
    }

    fs::read_to_string(path).map_err(|e| classify(path, e))
}

fn classify(path: &Path, source: io::Error) -> LoadError {
    match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_owned()),
        io::ErrorKind::PermissionDenied => LoadError::PermissionDenied(path.to_owned()),
        _ => LoadError::Io {
            path: path.to_owned(),
            source,
        },
    }
}
