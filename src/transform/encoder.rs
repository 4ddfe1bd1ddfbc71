//! One-hot encoding over a training vocabulary.

use std::collections::BTreeSet;

use crate::error::{PrepError, Result};

/// What to do with a category never seen during fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnseenPolicy {
    /// Encode the unseen value as an all-zero indicator vector.
    #[default]
    Ignore,
    /// Fail the transform with [`PrepError::UnknownCategory`].
    Error,
}

/// Expands each categorical column into one indicator column per training
/// category.
///
/// The vocabulary is the sorted set of distinct training values, so indicator
/// column order is deterministic and identical across splits.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotEncoder {
    categories: Vec<Vec<String>>,
    policy: UnseenPolicy,
}

impl OneHotEncoder {
    /// Learn the per-column vocabulary from fully imputed training columns.
    pub fn fit(columns: &[Vec<String>], policy: UnseenPolicy) -> Self {
        let categories = columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .cloned()
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .collect();
        Self { categories, policy }
    }

    /// Rebuild from a persisted vocabulary.
    pub fn from_categories(categories: Vec<Vec<String>>, policy: UnseenPolicy) -> Self {
        Self { categories, policy }
    }

    /// Learned vocabulary, one sorted list per column.
    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    /// The configured unseen-category policy.
    pub fn policy(&self) -> UnseenPolicy {
        self.policy
    }

    /// Total number of indicator columns across all encoded columns.
    pub fn n_output_columns(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Encode column `idx` into its indicator columns.
    ///
    /// `name` is used for diagnostics under [`UnseenPolicy::Error`].
    pub fn transform(&self, idx: usize, values: &[String], name: &str) -> Result<Vec<Vec<f32>>> {
        let vocabulary = &self.categories[idx];
        let mut indicators = vec![vec![0.0f32; values.len()]; vocabulary.len()];
        for (row, value) in values.iter().enumerate() {
            match vocabulary.binary_search(value) {
                Ok(cat) => indicators[cat][row] = 1.0,
                Err(_) => match self.policy {
                    UnseenPolicy::Ignore => {}
                    UnseenPolicy::Error => {
                        return Err(PrepError::UnknownCategory {
                            column: name.to_string(),
                            value: value.clone(),
                        })
                    }
                },
            }
        }
        Ok(indicators)
    }
}
