//! Missing-value imputation.
//!
//! Numeric gaps are filled with the training column's median, categorical
//! gaps with its mode. Statistics are learned once at fit time and applied
//! unchanged to any later split.

use std::collections::BTreeMap;

use crate::error::{PrepError, Result};

// =============================================================================
// MedianImputer
// =============================================================================

/// Fills `f32::NAN` gaps with per-column training medians.
#[derive(Debug, Clone, PartialEq)]
pub struct MedianImputer {
    medians: Vec<f32>,
}

impl MedianImputer {
    /// Learn one median per column, ignoring NaN.
    ///
    /// `names` is used for diagnostics only and must parallel `columns`.
    pub fn fit(columns: &[&[f32]], names: &[String]) -> Result<Self> {
        debug_assert_eq!(columns.len(), names.len());
        let medians = columns
            .iter()
            .zip(names)
            .map(|(column, name)| median(column, name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { medians })
    }

    /// Rebuild from persisted medians.
    pub fn from_medians(medians: Vec<f32>) -> Self {
        Self { medians }
    }

    /// Learned per-column medians.
    pub fn medians(&self) -> &[f32] {
        &self.medians
    }

    /// Replace NaN gaps in column `idx` with its learned median, in place.
    pub fn transform(&self, idx: usize, values: &mut [f32]) {
        let median = self.medians[idx];
        for value in values.iter_mut() {
            if value.is_nan() {
                *value = median;
            }
        }
    }
}

/// Median of the non-NaN values; an even count averages the two middles.
fn median(values: &[f32], name: &str) -> Result<f32> {
    let mut observed: Vec<f32> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if observed.is_empty() {
        return Err(PrepError::EmptyColumn {
            name: name.to_string(),
        });
    }
    observed.sort_by(f32::total_cmp);
    let mid = observed.len() / 2;
    if observed.len() % 2 == 1 {
        Ok(observed[mid])
    } else {
        Ok((observed[mid - 1] + observed[mid]) / 2.0)
    }
}

// =============================================================================
// ModeImputer
// =============================================================================

/// Fills `None` gaps with per-column training modes.
///
/// Ties are broken toward the lexicographically smallest category, so the
/// learned mode is deterministic regardless of row order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeImputer {
    modes: Vec<String>,
}

impl ModeImputer {
    /// Learn one mode per column, ignoring missing entries.
    pub fn fit(columns: &[&[Option<String>]], names: &[String]) -> Result<Self> {
        debug_assert_eq!(columns.len(), names.len());
        let modes = columns
            .iter()
            .zip(names)
            .map(|(column, name)| mode(column, name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { modes })
    }

    /// Rebuild from persisted modes.
    pub fn from_modes(modes: Vec<String>) -> Self {
        Self { modes }
    }

    /// Learned per-column modes.
    pub fn modes(&self) -> &[String] {
        &self.modes
    }

    /// Fill gaps in column `idx`, returning a fully observed column.
    pub fn transform(&self, idx: usize, values: &[Option<String>]) -> Vec<String> {
        let mode = &self.modes[idx];
        values
            .iter()
            .map(|v| v.clone().unwrap_or_else(|| mode.clone()))
            .collect()
    }
}

fn mode(values: &[Option<String>], name: &str) -> Result<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values.iter().flatten() {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    // BTreeMap iterates in sorted key order; strict `>` keeps the smallest key
    // among equal counts.
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map(|(_, c)| count > c).unwrap_or(true) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string())
        .ok_or_else(|| PrepError::EmptyColumn {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("col{i}")).collect()
    }

    #[rstest]
    #[case(vec![3.0, 1.0, 2.0], 2.0)] // odd count
    #[case(vec![1.0, 2.0, 3.0, 4.0], 2.5)] // even count averages middles
    #[case(vec![70.0, f32::NAN], 70.0)] // NaN ignored
    fn median_cases(#[case] column: Vec<f32>, #[case] expected: f32) {
        let imputer = MedianImputer::fit(&[column.as_slice()], &names(1)).unwrap();
        assert_eq!(imputer.medians()[0], expected);
    }

    #[test]
    fn median_of_all_nan_is_an_error() {
        let column = vec![f32::NAN, f32::NAN];
        let err = MedianImputer::fit(&[column.as_slice()], &names(1)).unwrap_err();
        assert!(matches!(err, PrepError::EmptyColumn { .. }));
    }

    #[test]
    fn median_imputer_fills_gaps_only() {
        let imputer = MedianImputer::from_medians(vec![70.0]);
        let mut values = vec![50.0, f32::NAN, 90.0];
        imputer.transform(0, &mut values);
        assert_eq!(values, vec![50.0, 70.0, 90.0]);
    }

    #[test]
    fn mode_picks_most_frequent() {
        let column = vec![
            Some("standard".to_string()),
            Some("free".to_string()),
            Some("standard".to_string()),
        ];
        let imputer = ModeImputer::fit(&[column.as_slice()], &names(1)).unwrap();
        assert_eq!(imputer.modes()[0], "standard");
    }

    #[test]
    fn mode_tie_breaks_lexicographically() {
        let column = vec![Some("zebra".to_string()), Some("apple".to_string())];
        let imputer = ModeImputer::fit(&[column.as_slice()], &names(1)).unwrap();
        assert_eq!(imputer.modes()[0], "apple");
    }

    #[test]
    fn mode_ignores_missing_entries() {
        let column = vec![None, Some("male".to_string()), None];
        let imputer = ModeImputer::fit(&[column.as_slice()], &names(1)).unwrap();
        assert_eq!(imputer.modes()[0], "male");
    }

    #[test]
    fn mode_of_all_missing_is_an_error() {
        let column: Vec<Option<String>> = vec![None, None];
        let err = ModeImputer::fit(&[column.as_slice()], &names(1)).unwrap_err();
        assert!(matches!(err, PrepError::EmptyColumn { .. }));
    }

    #[test]
    fn mode_imputer_fills_gaps() {
        let imputer = ModeImputer::from_modes(vec!["male".to_string()]);
        let filled = imputer.transform(0, &[Some("female".to_string()), None]);
        assert_eq!(filled, vec!["female".to_string(), "male".to_string()]);
    }
}
