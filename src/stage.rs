//! The data-transformation stage for the student-performance dataset.
//!
//! Reads the train/test CSV splits, fits the preprocessor on train only,
//! transforms both splits into dense matrices with the target appended as the
//! last column, and persists the fitted preprocessor for inference.

use std::path::{Path, PathBuf};

use ndarray::{s, Array2};
use tracing::info;

use crate::config::TransformationConfig;
use crate::data::{read_csv, ColumnMeta, TableSchema};
use crate::error::Result;
use crate::persist;
use crate::transform::Preprocessor;

/// Numeric feature columns, in output order.
pub const NUMERIC_COLUMNS: [&str; 2] = ["writing_score", "reading_score"];

/// Categorical feature columns, in output block order.
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "gender",
    "race_ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
];

/// Prediction target column.
pub const TARGET_COLUMN: &str = "math_score";

/// Declared schema of the student-performance CSV files.
pub fn dataset_schema() -> TableSchema {
    let mut columns: Vec<ColumnMeta> = CATEGORICAL_COLUMNS
        .iter()
        .copied()
        .map(ColumnMeta::categorical)
        .collect();
    columns.extend(NUMERIC_COLUMNS.iter().copied().map(ColumnMeta::numeric));
    columns.push(ColumnMeta::target(TARGET_COLUMN));
    TableSchema::from_columns(columns)
}

/// Output of a transformation run.
#[derive(Debug, Clone)]
pub struct TransformationOutput {
    /// Transformed training matrix; last column is the target.
    pub train: Array2<f32>,
    /// Transformed test matrix; last column is the target.
    pub test: Array2<f32>,
    /// Where the fitted preprocessor was persisted.
    pub artifact_path: PathBuf,
}

/// The preprocessing stage: CSV splits in, matrices and artifact out.
#[derive(Debug, Clone)]
pub struct DataTransformation {
    config: TransformationConfig,
}

impl DataTransformation {
    /// Stage with the given configuration.
    pub fn new(config: TransformationConfig) -> Self {
        Self { config }
    }

    /// The unfit preprocessor over the fixed column roles.
    pub fn preprocessor() -> Preprocessor {
        Preprocessor::new(NUMERIC_COLUMNS, CATEGORICAL_COLUMNS)
    }

    /// Run the stage end to end.
    ///
    /// Fits on the training split only; the test split is transformed with
    /// the learned state, so its content never influences the statistics.
    pub fn run(
        &self,
        train_path: impl AsRef<Path>,
        test_path: impl AsRef<Path>,
    ) -> Result<TransformationOutput> {
        let schema = dataset_schema();
        let train = read_csv(train_path.as_ref(), &schema)?;
        let test = read_csv(test_path.as_ref(), &schema)?;
        info!(
            train_rows = train.n_rows(),
            test_rows = test.n_rows(),
            columns = ?schema.names(),
            "read train and test data"
        );

        let (train_features, train_target) = train.split_target(TARGET_COLUMN)?;
        let (test_features, test_target) = test.split_target(TARGET_COLUMN)?;

        let fitted = Self::preprocessor().fit(&train_features)?;
        let train_matrix = append_target(fitted.transform(&train_features)?, &train_target);
        let test_matrix = append_target(fitted.transform(&test_features)?, &test_target);
        info!(
            output_columns = fitted.n_output_columns() + 1,
            "applied preprocessor to train and test"
        );

        persist::save(&fitted, &self.config.artifact_path)?;
        info!(path = %self.config.artifact_path.display(), "saved preprocessor artifact");

        Ok(TransformationOutput {
            train: train_matrix,
            test: test_matrix,
            artifact_path: self.config.artifact_path.clone(),
        })
    }
}

/// Append the target as the last column of the feature matrix.
fn append_target(features: Array2<f32>, target: &[f32]) -> Array2<f32> {
    let (rows, cols) = features.dim();
    debug_assert_eq!(rows, target.len(), "target length must match row count");
    let mut out = Array2::zeros((rows, cols + 1));
    out.slice_mut(s![.., ..cols]).assign(&features);
    for (row, &value) in target.iter().enumerate() {
        out[[row, cols]] = value;
    }
    out
}
