//! Storage error model.
//!
//! Anything in here is fatal from the caller's perspective: the shell
//! surfaces it and gives up on the current operation. There is no partial
//! recovery.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the storage layer.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem failure (unreadable file, unwritable directory).
    #[error("storage io failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted table exists but cannot be understood.
    #[error("persisted table is corrupt: {0}")]
    Corrupt(String),

    /// CSV encode/decode failure.
    #[error("csv failure: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet export failure.
    #[error("spreadsheet export failure: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// The suggested image filename had no usable final component.
    #[error("invalid image filename: {0:?}")]
    InvalidImageName(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }
}
