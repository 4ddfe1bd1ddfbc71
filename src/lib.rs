//! tabprep: column-wise preprocessing for tabular ML pipelines.
//!
//! Builds a deterministic column transformer (median/mode imputation, one-hot
//! encoding, no-centering variance scaling), fits it on a training split,
//! applies it to any number of evaluation splits, and persists the fitted
//! state for inference-time reuse.
//!
//! # Key Types
//!
//! - [`DataTransformation`] - High-level stage: CSV in, matrices + artifact out
//! - [`Preprocessor`] / [`FittedPreprocessor`] - Two-phase fit/transform contract
//! - [`Table`] / [`TableSchema`] - Column-major tabular container
//! - [`TransformationConfig`] - Explicit stage configuration
//!
//! # Fit/transform contract
//!
//! [`Preprocessor::fit`] consumes nothing and returns a [`FittedPreprocessor`];
//! only the fitted type can transform. Transforming before fitting is therefore
//! unrepresentable, and `transform` takes `&self`, so no amount of transforming
//! evaluation data can alter the learned statistics.
//!
//! # Example
//!
//! ```no_run
//! use tabprep::{DataTransformation, TransformationConfig};
//!
//! let stage = DataTransformation::new(TransformationConfig::default());
//! let out = stage.run("artifacts/train.csv", "artifacts/test.csv")?;
//! assert_eq!(out.train.ncols(), out.test.ncols());
//! # Ok::<(), tabprep::PrepError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod persist;
pub mod stage;
pub mod transform;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use config::TransformationConfig;
pub use data::{Column, ColumnMeta, ColumnRole, Table, TableSchema};
pub use error::PrepError;
pub use stage::{DataTransformation, TransformationOutput};
pub use transform::{FittedPreprocessor, Preprocessor, UnseenPolicy};
