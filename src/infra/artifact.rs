// ============================================================
// Layer 6 — Model Artifact Loader
// ============================================================
// Reads the model manifest from disk, validates it against the
// feature vector the application builds, and turns it into one
// owned, read-only `LoadedModel` handle.
//
// Manifest layout (JSON):
//
//   {
//     "format_version": 1,
//     "feature_names": ["Pclass","Sex","Age","SibSp","Parch","Fare","Embarked"],
//     "scaler":    { "mean": [...7], "scale": [...7] },      (optional)
//     "estimator": { "kind": "logistic_regression", ... }
//   }
//
// Schema validation happens here, once, at load time:
//   - feature_names must equal FEATURE_NAMES, same order
//   - every parameter array must match FEATURE_COUNT
// A model trained on a different column order is refused
// instead of silently producing wrong predictions.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::domain::passenger::{FEATURE_COUNT, FEATURE_NAMES};
use crate::domain::prediction::Survival;
use crate::domain::traits::Classifier;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::{
    forest::RandomForest,
    inferencer::MlpClassifier,
    linear::LogisticRegression,
};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read model artifact '{}'", .path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact '{}' is not a valid manifest", .path.display())]
    Parse {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported artifact format version {found} (expected {})", FORMAT_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("model expects features {found:?} but the form produces {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found:    Vec<String>,
    },

    #[error("invalid model parameters: {0}")]
    InvalidParameters(String),

    #[error("cannot load MLP checkpoint '{}': {reason}", .path.display())]
    Checkpoint { path: PathBuf, reason: String },
}

// ─── Manifest ─────────────────────────────────────────────────────────────────

/// Standardisation applied before the estimator: (x - mean) / scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean:  Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ArtifactError::InvalidParameters(format!(
                "scaler has {} means and {} scales, expected {FEATURE_COUNT} of each",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(ArtifactError::InvalidParameters(
                "scaler values must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// A zero scale (constant training column) only centres the value.
    pub fn transform(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = *features;
        for (i, x) in out.iter_mut().enumerate() {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            *x = (*x - self.mean[i]) / scale;
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlpParams {
    pub hidden_size: usize,

    /// Checkpoint stem, relative to the manifest's directory
    pub weights: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimatorSpec {
    LogisticRegression(LogisticRegression),
    RandomForest(RandomForest),
    Mlp(MlpParams),
}

impl EstimatorSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LogisticRegression(_) => "logistic_regression",
            Self::RandomForest(_)       => "random_forest",
            Self::Mlp(_)                => "mlp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub format_version: u32,
    pub feature_names:  Vec<String>,
    #[serde(default)]
    pub scaler:         Option<StandardScaler>,
    pub estimator:      EstimatorSpec,
}

impl ModelManifest {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion { found: self.format_version });
        }
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ArtifactError::SchemaMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found:    self.feature_names.clone(),
            });
        }
        if let Some(scaler) = &self.scaler {
            scaler.validate()?;
        }
        match &self.estimator {
            EstimatorSpec::LogisticRegression(lr) => lr.validate(),
            EstimatorSpec::RandomForest(rf)       => rf.validate(),
            // Shape checks for the MLP happen when burn loads the record
            EstimatorSpec::Mlp(_)                 => Ok(()),
        }
    }
}

// ─── LoadedModel ──────────────────────────────────────────────────────────────

/// The model handle: loaded once at startup, immutable afterwards,
/// and owned by whoever drives predictions.
pub struct LoadedModel {
    source:     PathBuf,
    kind:       &'static str,
    scaler:     Option<StandardScaler>,
    classifier: Box<dyn Classifier>,
}

impl fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModel")
            .field("source", &self.source)
            .field("kind", &self.kind)
            .field("scaled", &self.scaler.is_some())
            .finish()
    }
}

impl LoadedModel {
    /// Read, parse, and validate a manifest, then build its estimator.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: ModelManifest =
            serde_json::from_str(&json).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let model = Self::from_manifest(manifest, base_dir, path)?;
        tracing::info!("Loaded {} model from '{}'", model.kind, path.display());
        Ok(model)
    }

    /// Build from an already-parsed manifest. Relative checkpoint
    /// paths are resolved against `base_dir`.
    pub fn from_manifest(
        manifest: ModelManifest,
        base_dir: &Path,
        source:   &Path,
    ) -> Result<Self, ArtifactError> {
        manifest.validate()?;

        let kind = manifest.estimator.kind();
        let classifier: Box<dyn Classifier> = match manifest.estimator {
            EstimatorSpec::LogisticRegression(lr) => Box::new(lr),
            EstimatorSpec::RandomForest(rf)       => Box::new(rf),
            EstimatorSpec::Mlp(params) => {
                let ckpt = CheckpointManager::new(base_dir);
                Box::new(MlpClassifier::from_checkpoint(&ckpt, &params.weights, params.hidden_size)?)
            }
        };

        Ok(Self {
            source: source.to_path_buf(),
            kind,
            scaler: manifest.scaler,
            classifier,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_scaled(&self) -> bool {
        self.scaler.is_some()
    }

    fn prepare(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        match &self.scaler {
            Some(scaler) => scaler.transform(features),
            None         => *features,
        }
    }
}

impl Classifier for LoadedModel {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2]> {
        self.classifier.predict_proba(&self.prepare(features))
    }

    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Survival> {
        self.classifier.predict(&self.prepare(features))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{
        inferencer::{InferBackend, InferDevice},
        model::{SurvivalMlp, SurvivalMlpConfig},
    };

    const REFERENCE: &str = include_str!("../../models/reference_model.json");

    fn names() -> Vec<String> {
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
    }

    fn logistic() -> EstimatorSpec {
        EstimatorSpec::LogisticRegression(LogisticRegression {
            coefficients: vec![-1.0, -2.0, 0.0, 0.0, 0.0, 0.01, 0.0],
            intercept:    1.0,
        })
    }

    fn write_manifest(dir: &Path, manifest: &ModelManifest) -> PathBuf {
        let path = dir.join("model.json");
        fs::write(&path, serde_json::to_string_pretty(manifest).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_reference_manifest_parses() {
        let manifest: ModelManifest = serde_json::from_str(REFERENCE).unwrap();
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.estimator.kind(), "logistic_regression");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = LoadedModel::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ArtifactError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(LoadedModel::load(&path), Err(ArtifactError::Parse { .. })));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let json = r#"{"format_version":1,"feature_names":[],"estimator":{"kind":"svm"}}"#;
        fs::write(&path, json).unwrap();
        assert!(matches!(LoadedModel::load(&path), Err(ArtifactError::Parse { .. })));
    }

    #[test]
    fn test_transposed_columns_rejected() {
        let mut feature_names = names();
        feature_names.swap(0, 1);
        let manifest = ModelManifest {
            format_version: 1,
            feature_names,
            scaler: None,
            estimator: logistic(),
        };
        let err = manifest.validate().unwrap_err();
        assert!(matches!(err, ArtifactError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_missing_column_rejected() {
        let mut feature_names = names();
        feature_names.pop();
        let manifest = ModelManifest { format_version: 1, feature_names, scaler: None, estimator: logistic() };
        assert!(matches!(manifest.validate(), Err(ArtifactError::SchemaMismatch { .. })));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let manifest = ModelManifest { format_version: 2, feature_names: names(), scaler: None, estimator: logistic() };
        assert!(matches!(manifest.validate(), Err(ArtifactError::UnsupportedVersion { found: 2 })));
    }

    #[test]
    fn test_short_scaler_rejected() {
        let manifest = ModelManifest {
            format_version: 1,
            feature_names:  names(),
            scaler:         Some(StandardScaler { mean: vec![0.0; 6], scale: vec![1.0; 7] }),
            estimator:      logistic(),
        };
        assert!(matches!(manifest.validate(), Err(ArtifactError::InvalidParameters(_))));
    }

    #[test]
    fn test_scaler_applied_before_estimator() {
        // With mean = x the scaled input is all zeros → P = sigmoid(intercept)
        let x = [2.0, 1.0, 30.0, 1.0, 0.0, 100.0, 2.0];
        let manifest = ModelManifest {
            format_version: 1,
            feature_names:  names(),
            scaler:         Some(StandardScaler { mean: x.to_vec(), scale: vec![0.0; 7] }),
            estimator:      logistic(),
        };
        let model = LoadedModel::from_manifest(manifest, Path::new("."), Path::new("inline")).unwrap();
        assert!(model.is_scaled());
        let [_, p1] = model.predict_proba(&x).unwrap();
        let expected = 1.0 / (1.0 + (-1.0f64).exp());
        assert!((p1 - expected).abs() < 1e-12);
    }

    #[test]
    fn test_mlp_manifest_resolves_weights_next_to_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let device = InferDevice::default();
        let mlp: SurvivalMlp<InferBackend> = SurvivalMlpConfig::new(FEATURE_COUNT, 4).init(&device);
        CheckpointManager::new(dir.path()).save_model(&mlp, "survival_mlp").unwrap();

        let manifest = ModelManifest {
            format_version: 1,
            feature_names:  names(),
            scaler:         None,
            estimator:      EstimatorSpec::Mlp(MlpParams { hidden_size: 4, weights: "survival_mlp".to_string() }),
        };
        let path = write_manifest(dir.path(), &manifest);
        let model = LoadedModel::load(&path).unwrap();
        assert_eq!(model.kind(), "mlp");

        let [p0, p1] = model.predict_proba(&[0.0, 0.0, 30.0, 0.0, 0.0, 50.0, 0.0]).unwrap();
        assert!((p0 + p1 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_missing_mlp_weights_is_checkpoint_error() {
        let dir = tempfile::tempdir().unwrap();
        let device = InferDevice::default();
        let mlp: SurvivalMlp<InferBackend> = SurvivalMlpConfig::new(FEATURE_COUNT, 4).init(&device);
        CheckpointManager::new(dir.path()).save_model(&mlp, "survival_mlp").unwrap();

        let manifest = ModelManifest {
            format_version: 1,
            feature_names:  names(),
            scaler:         None,
            estimator:      EstimatorSpec::Mlp(MlpParams { hidden_size: 4, weights: "other".to_string() }),
        };
        let path = write_manifest(dir.path(), &manifest);
        assert!(matches!(LoadedModel::load(&path), Err(ArtifactError::Checkpoint { .. })));
    }
}
