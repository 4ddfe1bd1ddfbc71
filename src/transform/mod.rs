//! Fit/transform preprocessing primitives.
//!
//! # Overview
//!
//! The primitives here follow a two-phase contract: `fit` learns parameters
//! from training data and returns an immutable fitted value; `transform`
//! applies learned parameters without relearning. Composition happens in
//! [`Preprocessor`], which wires per-role pipelines over a column split:
//!
//! - numeric columns: median imputation, then variance scaling
//! - categorical columns: mode imputation, one-hot encoding, then variance
//!   scaling of the indicator columns
//!
//! Output blocks are concatenated [numeric, categorical], deterministically.

mod encoder;
mod imputer;
mod preprocessor;
mod scaler;

pub use encoder::{OneHotEncoder, UnseenPolicy};
pub use imputer::{MedianImputer, ModeImputer};
pub use preprocessor::{FittedPreprocessor, Preprocessor};
pub use scaler::VarianceScaler;
