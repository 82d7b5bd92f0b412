//! Error types for the archive crate.

use thiserror::Error;

/// Errors that can occur when working with cache entries.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] rafsuite_common::Error),

    /// DDS decoding failed.
    #[error("DDS decode failed: {0}")]
    Dds(#[from] rafsuite_dds::FormatError),

    /// The record points past the end of the path list.
    #[error("path list index {index} out of range (path count: {count})")]
    PathIndexOutOfRange { index: u32, count: usize },

    /// Populated data does not match the record's declared size.
    #[error("entry data size mismatch: expected {expected}, got {actual}")]
    DataSizeMismatch { expected: u32, actual: usize },
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, Error>;
