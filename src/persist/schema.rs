//! Serialization schema for the fitted preprocessor.
//!
//! Schema types are separate from the runtime types so the on-disk format can
//! evolve independently and deserialization can validate before constructing
//! runtime state.

use serde::{Deserialize, Serialize};

use crate::transform::{
    FittedPreprocessor, MedianImputer, ModeImputer, OneHotEncoder, UnseenPolicy, VarianceScaler,
};

/// Current artifact schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Unseen-category policy as serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnseenPolicySchema {
    /// Unseen categories encode as zero vectors.
    Ignore,
    /// Unseen categories fail the transform.
    Error,
}

impl From<UnseenPolicy> for UnseenPolicySchema {
    fn from(policy: UnseenPolicy) -> Self {
        match policy {
            UnseenPolicy::Ignore => UnseenPolicySchema::Ignore,
            UnseenPolicy::Error => UnseenPolicySchema::Error,
        }
    }
}

impl From<UnseenPolicySchema> for UnseenPolicy {
    fn from(schema: UnseenPolicySchema) -> Self {
        match schema {
            UnseenPolicySchema::Ignore => UnseenPolicy::Ignore,
            UnseenPolicySchema::Error => UnseenPolicy::Error,
        }
    }
}

/// Learned state of the numeric pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericBlockSchema {
    /// Column names, in output order.
    pub columns: Vec<String>,
    /// Per-column training medians.
    pub medians: Vec<f32>,
    /// Per-column scale factors.
    pub scale: Vec<f32>,
}

/// Learned state of the categorical pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalBlockSchema {
    /// Column names, in output block order.
    pub columns: Vec<String>,
    /// Per-column training modes.
    pub modes: Vec<String>,
    /// Sorted training vocabulary, one list per column.
    pub categories: Vec<Vec<String>>,
    /// Per-indicator-column scale factors.
    pub scale: Vec<f32>,
    /// Unseen-category policy.
    pub unseen_policy: UnseenPolicySchema,
}

/// On-disk representation of a [`FittedPreprocessor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessorSchema {
    /// Artifact schema version.
    pub version: u32,
    /// Numeric pipeline state.
    pub numeric: NumericBlockSchema,
    /// Categorical pipeline state.
    pub categorical: CategoricalBlockSchema,
}

impl From<&FittedPreprocessor> for PreprocessorSchema {
    fn from(fitted: &FittedPreprocessor) -> Self {
        let (imputer, numeric_scaler) = fitted.numeric_params();
        let (mode_imputer, encoder, categorical_scaler) = fitted.categorical_params();
        Self {
            version: SCHEMA_VERSION,
            numeric: NumericBlockSchema {
                columns: fitted.numeric_columns().to_vec(),
                medians: imputer.medians().to_vec(),
                scale: numeric_scaler.scale().to_vec(),
            },
            categorical: CategoricalBlockSchema {
                columns: fitted.categorical_columns().to_vec(),
                modes: mode_imputer.modes().to_vec(),
                categories: encoder.categories().to_vec(),
                scale: categorical_scaler.scale().to_vec(),
                unseen_policy: encoder.policy().into(),
            },
        }
    }
}

impl From<PreprocessorSchema> for FittedPreprocessor {
    fn from(schema: PreprocessorSchema) -> Self {
        FittedPreprocessor::from_parts(
            schema.numeric.columns,
            schema.categorical.columns,
            MedianImputer::from_medians(schema.numeric.medians),
            VarianceScaler::from_scale(schema.numeric.scale),
            ModeImputer::from_modes(schema.categorical.modes),
            OneHotEncoder::from_categories(
                schema.categorical.categories,
                schema.categorical.unseen_policy.into(),
            ),
            VarianceScaler::from_scale(schema.categorical.scale),
        )
    }
}
