use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use log::{error, info};
use serde::de::DeserializeOwned;

use crate::{
    input::RawInput,
    pipeline::{self, SalaryEstimate},
    regressor::Model,
    scaler::Scaler,
    schema::FeatureSchema,
    ArtifactError, SubmitError,
};

pub const MODEL_FILE: &str = "best_model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const COLUMNS_FILE: &str = "feature_columns.json";

const EMPTY_COLUMNS: &str = "feature column list is empty";

/// Where the three artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub columns: PathBuf,
}

impl ArtifactPaths {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(MODEL_FILE),
            scaler: dir.join(SCALER_FILE),
            columns: dir.join(COLUMNS_FILE),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// The trained model, its scaler and the columns it expects.
///
/// Never written after load, so it can be shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBundle {
    model: Model,
    scaler: Scaler,
    schema: FeatureSchema,
}

impl ArtifactBundle {
    /// Builds a bundle from artifacts already in memory, applying the same
    /// structural checks as [`ArtifactBundle::load`].
    ///
    /// # Errors
    /// Returns a human-readable reason on the first defect found.
    pub fn new(model: Model, scaler: Scaler, schema: FeatureSchema) -> Result<Self, String> {
        model.check()?;
        scaler.check()?;
        if schema.is_empty() {
            return Err(EMPTY_COLUMNS.into());
        }

        Ok(Self {
            model,
            scaler,
            schema,
        })
    }

    /// Reads and checks all three artifacts.
    ///
    /// # Errors
    /// Returns an `ArtifactError` naming the first file that is missing,
    /// unparsable or structurally invalid.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let model: Model = read_json(&paths.model)?;
        model.check().map_err(|reason| invalid(&paths.model, reason))?;

        let scaler: Scaler = read_json(&paths.scaler)?;
        scaler
            .check()
            .map_err(|reason| invalid(&paths.scaler, reason))?;

        let columns: Vec<String> = read_json(&paths.columns)?;
        if columns.is_empty() {
            return Err(invalid(&paths.columns, EMPTY_COLUMNS.into()));
        }

        Ok(Self {
            model,
            scaler,
            schema: FeatureSchema::new(columns),
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Validates, encodes, scales and scores one submission.
    ///
    /// # Errors
    /// See [`pipeline::submit`].
    pub fn submit(&self, input: &RawInput) -> Result<SalaryEstimate, SubmitError> {
        pipeline::submit(&self.model, &self.scaler, &self.schema, input)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(path: &Path, reason: String) -> ArtifactError {
    ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    }
}

/// Loads the bundle at most once per process.
///
/// The first call reads the files; every later call returns the same
/// outcome, including a failure. There is no retry and no fallback model.
#[derive(Debug)]
pub struct ArtifactCache {
    paths: ArtifactPaths,
    slot: OnceLock<Result<ArtifactBundle, Arc<ArtifactError>>>,
}

impl ArtifactCache {
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths,
            slot: OnceLock::new(),
        }
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// Returns the cached bundle, loading it on first use.
    ///
    /// # Errors
    /// Returns the (cached) load failure.
    pub fn get(&self) -> Result<&ArtifactBundle, Arc<ArtifactError>> {
        self.slot
            .get_or_init(|| {
                info!("loading artifacts from {:?}", self.paths);
                match ArtifactBundle::load(&self.paths) {
                    Ok(bundle) => {
                        info!(
                            "loaded {} model over {} feature columns",
                            bundle.model.kind(),
                            bundle.schema.len()
                        );
                        Ok(bundle)
                    }
                    Err(e) => {
                        error!("could not load artifacts: {e}");
                        Err(Arc::new(e))
                    }
                }
            })
            .as_ref()
            .map_err(Arc::clone)
    }

    /// Whether a load has already been attempted.
    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regressor::Tree;

    #[test]
    fn default_paths_use_fixed_file_names() {
        let paths = ArtifactPaths::in_dir("models");
        assert_eq!(paths.model, Path::new("models/best_model.json"));
        assert_eq!(paths.scaler, Path::new("models/scaler.json"));
        assert_eq!(paths.columns, Path::new("models/feature_columns.json"));
    }

    #[test]
    fn missing_files_report_io_error_for_model_first() {
        let paths = ArtifactPaths::in_dir("/definitely/not/here");
        match ArtifactBundle::load(&paths) {
            Err(ArtifactError::Io { path, .. }) => assert_eq!(path, paths.model),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn new_applies_the_load_checks() {
        let schema = || FeatureSchema::new(["Age"]);
        let cyclic = Tree {
            children_left: vec![0],
            children_right: vec![0],
            feature: vec![0],
            threshold: vec![0.0],
            value: vec![1.0],
        };

        let tree = Model::DecisionTree { tree: cyclic };
        assert!(ArtifactBundle::new(tree, Scaler::Identity, schema()).is_err());
        assert!(ArtifactBundle::new(
            Model::Linear {
                coefficients: vec![1.0],
                intercept: 0.0,
            },
            Scaler::MinMax {
                min: vec![0.0],
                scale: vec![],
            },
            schema(),
        )
        .is_err());

        let linear = Model::Linear {
            coefficients: vec![1.0],
            intercept: 0.0,
        };
        let no_columns = FeatureSchema::new(Vec::<String>::new());
        assert_eq!(
            ArtifactBundle::new(linear.clone(), Scaler::Identity, no_columns).unwrap_err(),
            EMPTY_COLUMNS
        );
        assert!(ArtifactBundle::new(linear, Scaler::Identity, schema()).is_ok());
    }

    #[test]
    fn cache_keeps_failure_without_retrying() {
        let cache = ArtifactCache::new(ArtifactPaths::in_dir("/definitely/not/here"));
        assert!(!cache.is_loaded());

        let first = cache.get().unwrap_err();
        let second = cache.get().unwrap_err();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_loaded());
    }
}
