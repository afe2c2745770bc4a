//! Error types for flatkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::value::Kind;

/// Result type alias using FlatKvError
pub type Result<T> = std::result::Result<T, FlatKvError>;

/// Unified error type for flatkv operations
#[derive(Debug, Error)]
pub enum FlatKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("unsupported value: {0}")]
    UnsupportedType(String),

    #[error("malformed {kind} payload: {detail}")]
    DecodeMismatch { kind: Kind, detail: String },

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("corrupt record at line {line}: {detail}")]
    CorruptRecord { line: usize, detail: String },
}
