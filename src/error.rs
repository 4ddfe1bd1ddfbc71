//! Crate-level error type.
//!
//! Every fallible operation in this crate returns [`PrepError`]. Variants carry
//! the failing column/row/path and chain the underlying cause where one exists,
//! so the final diagnostic names both the stage that failed and the root cause.

use std::path::PathBuf;

use crate::data::ColumnRole;

/// Errors produced while reading, fitting, transforming, or persisting.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// Filesystem failure while touching `path`.
    #[error("i/o failure on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV-level failure (open, header, or record parse) on `path`.
    #[error("failed to read csv {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column required by the schema (including the target) is absent.
    #[error("column '{name}' not found")]
    MissingColumn { name: String },

    /// The file's header row does not match the declared schema.
    #[error("schema mismatch: expected columns {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A column exists but with a different role than the caller asked for.
    #[error("column '{column}' does not have role {expected:?}")]
    WrongRole { column: String, expected: ColumnRole },

    /// A numeric CSV field failed to parse. `row` is 1-based over data rows.
    #[error("invalid numeric value '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// A column had no observed value to learn a median or mode from.
    #[error("column '{name}' has no observed values to fit on")]
    EmptyColumn { name: String },

    /// A category absent from the training vocabulary was encountered under
    /// [`UnseenPolicy::Error`](crate::transform::UnseenPolicy::Error).
    #[error("unknown category '{value}' in column '{column}'")]
    UnknownCategory { column: String, value: String },

    /// The persisted artifact was written by an incompatible schema version.
    #[error("unsupported artifact version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Failed to serialize the fitted preprocessor.
    #[error("failed to encode preprocessor artifact")]
    Encode(#[source] serde_json::Error),

    /// Failed to deserialize the fitted preprocessor.
    #[error("failed to decode preprocessor artifact")]
    Decode(#[source] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T, E = PrepError> = std::result::Result<T, E>;
