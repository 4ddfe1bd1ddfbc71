//! Unit-variance scaling without centering.

/// Scales each column by the square root of its biased variance, without
/// subtracting the mean.
///
/// Skipping the centering step keeps zero meaningful, which matters for the
/// one-hot indicator block where zero encodes "not this category". A column
/// with zero variance keeps a scale of `1.0` and passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceScaler {
    scale: Vec<f32>,
}

impl VarianceScaler {
    /// Learn per-column scale factors from training columns.
    ///
    /// Columns must already be imputed (no NaN).
    pub fn fit(columns: &[Vec<f32>]) -> Self {
        let scale = columns.iter().map(|c| column_scale(c)).collect();
        Self { scale }
    }

    /// Rebuild from persisted scale factors.
    pub fn from_scale(scale: Vec<f32>) -> Self {
        Self { scale }
    }

    /// Learned per-column scale factors.
    pub fn scale(&self) -> &[f32] {
        &self.scale
    }

    /// Divide every value in every column by its learned scale, in place.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the column count matches the fitted count.
    pub fn transform(&self, columns: &mut [Vec<f32>]) {
        debug_assert_eq!(
            columns.len(),
            self.scale.len(),
            "column count must match fitted scale count"
        );
        for (column, &scale) in columns.iter_mut().zip(&self.scale) {
            for value in column.iter_mut() {
                *value /= scale;
            }
        }
    }
}

/// `sqrt` of the biased (population) variance, accumulated in f64.
/// Zero variance (or an empty column) maps to `1.0`.
fn column_scale(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 1.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let var = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    if var == 0.0 {
        1.0
    } else {
        var.sqrt() as f32
    }
}
