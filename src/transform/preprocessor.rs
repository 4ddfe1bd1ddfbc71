//! Column-wise preprocessor composition.
//!
//! [`Preprocessor`] is the unfit description (column split + policy);
//! [`Preprocessor::fit`] learns all statistics from a training table and
//! returns a [`FittedPreprocessor`], the only type that can transform.
//! Configuration and fitted state are different types, so a
//! transform-before-fit cannot be expressed.

use ndarray::Array2;

use crate::data::Table;
use crate::error::Result;

use super::encoder::{OneHotEncoder, UnseenPolicy};
use super::imputer::{MedianImputer, ModeImputer};
use super::scaler::VarianceScaler;

// =============================================================================
// Preprocessor (unfit)
// =============================================================================

/// Unfit column transformer description.
///
/// # Example
///
/// ```
/// use tabprep::{Column, ColumnMeta, Preprocessor, Table, TableSchema, UnseenPolicy};
///
/// let schema = TableSchema::from_columns(vec![
///     ColumnMeta::numeric("reading_score"),
///     ColumnMeta::categorical("gender"),
/// ]);
/// let train = Table::from_columns(
///     schema,
///     vec![
///         Column::Numeric(vec![70.0, 90.0]),
///         Column::Categorical(vec![Some("male".into()), Some("female".into())]),
///     ],
/// );
///
/// let fitted = Preprocessor::new(["reading_score"], ["gender"])
///     .with_unseen_policy(UnseenPolicy::Ignore)
///     .fit(&train)?;
/// let matrix = fitted.transform(&train)?;
/// assert_eq!(matrix.dim(), (2, 3)); // 1 numeric + 2 indicator columns
/// # Ok::<(), tabprep::PrepError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    numeric_columns: Vec<String>,
    categorical_columns: Vec<String>,
    unseen_policy: UnseenPolicy,
}

impl Preprocessor {
    /// Describe a transformer over the given column split.
    ///
    /// Output column order is [numeric columns in the given order, then one
    /// indicator block per categorical column in the given order].
    pub fn new<N, C>(numeric: N, categorical: C) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            numeric_columns: numeric.into_iter().map(Into::into).collect(),
            categorical_columns: categorical.into_iter().map(Into::into).collect(),
            unseen_policy: UnseenPolicy::default(),
        }
    }

    /// Set the unseen-category policy (default: [`UnseenPolicy::Ignore`]).
    pub fn with_unseen_policy(mut self, policy: UnseenPolicy) -> Self {
        self.unseen_policy = policy;
        self
    }

    /// Learn imputation statistics, vocabulary, and scale factors from the
    /// training table only.
    pub fn fit(&self, train: &Table) -> Result<FittedPreprocessor> {
        // Numeric pipeline: median imputation, then no-centering scaling.
        let mut numeric_raw = Vec::with_capacity(self.numeric_columns.len());
        for name in &self.numeric_columns {
            numeric_raw.push(train.numeric_column(name)?);
        }
        let imputer = MedianImputer::fit(&numeric_raw, &self.numeric_columns)?;
        let mut numeric_filled: Vec<Vec<f32>> =
            numeric_raw.iter().map(|c| c.to_vec()).collect();
        for (idx, column) in numeric_filled.iter_mut().enumerate() {
            imputer.transform(idx, column);
        }
        let numeric_scaler = VarianceScaler::fit(&numeric_filled);

        // Categorical pipeline: mode imputation, one-hot, then scaling of the
        // indicator columns.
        let mut categorical_raw = Vec::with_capacity(self.categorical_columns.len());
        for name in &self.categorical_columns {
            categorical_raw.push(train.categorical_column(name)?);
        }
        let mode_imputer = ModeImputer::fit(&categorical_raw, &self.categorical_columns)?;
        let categorical_filled: Vec<Vec<String>> = categorical_raw
            .iter()
            .enumerate()
            .map(|(idx, column)| mode_imputer.transform(idx, column))
            .collect();
        let encoder = OneHotEncoder::fit(&categorical_filled, self.unseen_policy);
        let mut indicators = Vec::with_capacity(encoder.n_output_columns());
        for (idx, (column, name)) in categorical_filled
            .iter()
            .zip(&self.categorical_columns)
            .enumerate()
        {
            // Every training value is in the vocabulary, so this cannot fail.
            indicators.extend(encoder.transform(idx, column, name)?);
        }
        let categorical_scaler = VarianceScaler::fit(&indicators);

        Ok(FittedPreprocessor {
            numeric_columns: self.numeric_columns.clone(),
            categorical_columns: self.categorical_columns.clone(),
            imputer,
            numeric_scaler,
            mode_imputer,
            encoder,
            categorical_scaler,
        })
    }
}

// =============================================================================
// FittedPreprocessor
// =============================================================================

/// A preprocessor with learned state. Transform applies that state without
/// relearning; the evaluation data can never influence it.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedPreprocessor {
    numeric_columns: Vec<String>,
    categorical_columns: Vec<String>,
    imputer: MedianImputer,
    numeric_scaler: VarianceScaler,
    mode_imputer: ModeImputer,
    encoder: OneHotEncoder,
    categorical_scaler: VarianceScaler,
}

impl FittedPreprocessor {
    /// Rebuild a fitted preprocessor from its learned parts (persistence).
    pub(crate) fn from_parts(
        numeric_columns: Vec<String>,
        categorical_columns: Vec<String>,
        imputer: MedianImputer,
        numeric_scaler: VarianceScaler,
        mode_imputer: ModeImputer,
        encoder: OneHotEncoder,
        categorical_scaler: VarianceScaler,
    ) -> Self {
        Self {
            numeric_columns,
            categorical_columns,
            imputer,
            numeric_scaler,
            mode_imputer,
            encoder,
            categorical_scaler,
        }
    }

    /// Numeric feature column names, in output order.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_columns
    }

    /// Categorical feature column names, in output block order.
    pub fn categorical_columns(&self) -> &[String] {
        &self.categorical_columns
    }

    /// Learned numeric medians and scale factors.
    pub fn numeric_params(&self) -> (&MedianImputer, &VarianceScaler) {
        (&self.imputer, &self.numeric_scaler)
    }

    /// Learned categorical modes, vocabulary, and indicator scale factors.
    pub fn categorical_params(&self) -> (&ModeImputer, &OneHotEncoder, &VarianceScaler) {
        (&self.mode_imputer, &self.encoder, &self.categorical_scaler)
    }

    /// Number of output feature columns (numeric + one-hot indicators).
    pub fn n_output_columns(&self) -> usize {
        self.numeric_columns.len() + self.encoder.n_output_columns()
    }

    /// Transform a table into a dense `[n_rows, n_output_columns]` matrix.
    ///
    /// Row order matches input row order; column order is [numeric block,
    /// categorical indicator block], identical for every split.
    pub fn transform(&self, table: &Table) -> Result<Array2<f32>> {
        let n_rows = table.n_rows();
        let mut output: Vec<Vec<f32>> = Vec::with_capacity(self.n_output_columns());

        let mut numeric = Vec::with_capacity(self.numeric_columns.len());
        for (idx, name) in self.numeric_columns.iter().enumerate() {
            let mut column = table.numeric_column(name)?.to_vec();
            self.imputer.transform(idx, &mut column);
            numeric.push(column);
        }
        self.numeric_scaler.transform(&mut numeric);
        output.extend(numeric);

        let mut indicators = Vec::with_capacity(self.encoder.n_output_columns());
        for (idx, name) in self.categorical_columns.iter().enumerate() {
            let filled = self.mode_imputer.transform(idx, table.categorical_column(name)?);
            indicators.extend(self.encoder.transform(idx, &filled, name)?);
        }
        self.categorical_scaler.transform(&mut indicators);
        output.extend(indicators);

        let mut matrix = Array2::<f32>::zeros((n_rows, output.len()));
        for (col, values) in output.iter().enumerate() {
            for (row, &value) in values.iter().enumerate() {
                matrix[[row, col]] = value;
            }
        }
        Ok(matrix)
    }
}
