use std::path::PathBuf;

use thiserror::Error;

use crate::entry::EntryField;

/// A user-entered value that cannot be recorded. Nothing is mutated when this is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is not a number: {input:?}")]
    NotANumber { field: EntryField, input: String },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: EntryField, value: f64 },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize running log: {0}")]
    Serialize(#[from] serde_json::Error),
}
