//! Stage configuration.
//!
//! Configuration is an explicit value passed into
//! [`DataTransformation::new`](crate::stage::DataTransformation::new); there
//! is no module-level mutable state. Each run overwrites the artifact path it
//! is given. Single-writer assumption, no locking.

use std::path::{Path, PathBuf};

/// Configuration for the data-transformation stage.
#[derive(Debug, Clone)]
pub struct TransformationConfig {
    /// Where the fitted preprocessor is persisted. Parent directories are
    /// created on save; an existing file is overwritten.
    pub artifact_path: PathBuf,
}

impl Default for TransformationConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("artifacts/preprocessor.json"),
        }
    }
}

impl TransformationConfig {
    /// Configuration with an explicit artifact path.
    pub fn new(artifact_path: impl AsRef<Path>) -> Self {
        Self {
            artifact_path: artifact_path.as_ref().to_path_buf(),
        }
    }

    /// Set the artifact path.
    pub fn with_artifact_path(mut self, path: impl AsRef<Path>) -> Self {
        self.artifact_path = path.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_artifact_path() {
        let config = TransformationConfig::default();
        assert_eq!(
            config.artifact_path,
            PathBuf::from("artifacts/preprocessor.json")
        );
    }

    #[test]
    fn with_artifact_path_overrides() {
        let config = TransformationConfig::default().with_artifact_path("out/p.json");
        assert_eq!(config.artifact_path, PathBuf::from("out/p.json"));
    }
}
