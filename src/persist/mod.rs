//! Artifact persistence for the fitted preprocessor.
//!
//! The artifact is a single JSON file holding a versioned
//! [`PreprocessorSchema`]. Saving overwrites any existing file (single-writer
//! assumption); loading validates the version before constructing runtime
//! state.

mod schema;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{PrepError, Result};
use crate::transform::FittedPreprocessor;

pub use schema::{
    CategoricalBlockSchema, NumericBlockSchema, PreprocessorSchema, UnseenPolicySchema,
    SCHEMA_VERSION,
};

/// Serialize a fitted preprocessor to `path`, creating parent directories.
pub fn save(fitted: &FittedPreprocessor, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PrepError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let file = File::create(path).map_err(|source| PrepError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = PreprocessorSchema::from(fitted);
    serde_json::to_writer(BufWriter::new(file), &schema).map_err(PrepError::Encode)
}

/// Load a fitted preprocessor back from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<FittedPreprocessor> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PrepError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schema: PreprocessorSchema =
        serde_json::from_reader(BufReader::new(file)).map_err(PrepError::Decode)?;
    if schema.version != SCHEMA_VERSION {
        return Err(PrepError::UnsupportedVersion {
            found: schema.version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(schema.into())
}
