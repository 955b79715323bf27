//! Error types for the flat-file store.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single line of a data file was rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid id: {0:?}")]
    InvalidId(String),

    /// Not a number, not finite, or negative.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("line is not valid UTF-8")]
    Encoding,
}

/// A data file could not be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
