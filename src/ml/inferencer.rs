// ============================================================
// Layer 5 — MLP Inferencer
// ============================================================
use anyhow::{anyhow, ensure, Result};
use burn::prelude::*;
use burn::tensor::TensorData;

use crate::domain::passenger::FEATURE_COUNT;
use crate::domain::traits::Classifier;
use crate::infra::artifact::ArtifactError;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{SurvivalMlp, SurvivalMlpConfig};

pub type InferBackend = burn::backend::NdArray;
pub type InferDevice  = burn::backend::ndarray::NdArrayDevice;

/// Runs a trained `SurvivalMlp` on the CPU, one passenger at a time.
pub struct MlpClassifier {
    model:  SurvivalMlp<InferBackend>,
    device: InferDevice,
}

impl MlpClassifier {
    pub fn new(model: SurvivalMlp<InferBackend>, device: InferDevice) -> Self {
        Self { model, device }
    }

    pub fn from_checkpoint(
        ckpt_manager: &CheckpointManager,
        weights:      &str,
        hidden_size:  usize,
    ) -> Result<Self, ArtifactError> {
        if hidden_size == 0 {
            return Err(ArtifactError::InvalidParameters(
                "mlp hidden_size must be positive".to_string(),
            ));
        }
        let device = InferDevice::default();
        let model: SurvivalMlp<InferBackend> =
            SurvivalMlpConfig::new(FEATURE_COUNT, hidden_size).init(&device);
        let model = ckpt_manager.load_model(model, weights, &device)?;
        tracing::info!("MLP loaded: hidden_size={}", hidden_size);
        Ok(Self::new(model, device))
    }
}

impl Classifier for MlpClassifier {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2]> {
        let input: Vec<f32> = features.iter().map(|&x| x as f32).collect();
        let input = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(input, [1, FEATURE_COUNT]),
            &self.device,
        );

        let proba: Vec<f32> = self
            .model
            .forward_proba(input)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("MLP output: {e:?}"))?;

        ensure!(proba.len() == 2, "MLP produced {} class probabilities, expected 2", proba.len());
        Ok([proba[0] as f64, proba[1] as f64])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_model() -> (SurvivalMlp<InferBackend>, InferDevice) {
        let device = InferDevice::default();
        (SurvivalMlpConfig::new(FEATURE_COUNT, 8).init(&device), device)
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (model, device) = fresh_model();
        let clf = MlpClassifier::new(model, device);
        let [p0, p1] = clf.predict_proba(&[2.0, 1.0, 30.0, 1.0, 0.0, 100.0, 2.0]).unwrap();
        assert!((0.0..=1.0).contains(&p0));
        assert!((0.0..=1.0).contains(&p1));
        assert!((p0 + p1 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_same_input_same_output() {
        let (model, device) = fresh_model();
        let clf = MlpClassifier::new(model, device);
        let x = [0.0, 0.0, 4.0, 1.0, 2.0, 30.0, 0.0];
        assert_eq!(clf.predict_proba(&x).unwrap(), clf.predict_proba(&x).unwrap());
    }

    #[test]
    fn test_checkpoint_reload_matches() {
        let dir = tempfile::tempdir().unwrap();
        let ckpt = CheckpointManager::new(dir.path());
        let (model, device) = fresh_model();
        ckpt.save_model(&model, "mlp").unwrap();

        let x = [1.0, 0.0, 22.0, 0.0, 1.0, 60.0, 1.0];
        let original = MlpClassifier::new(model, device).predict_proba(&x).unwrap();
        let reloaded = MlpClassifier::from_checkpoint(&ckpt, "mlp", 8)
            .unwrap()
            .predict_proba(&x)
            .unwrap();

        // CompactRecorder stores half precision
        assert!((original[1] - reloaded[1]).abs() < 1e-2);
    }

    #[test]
    fn test_missing_checkpoint_is_checkpoint_error() {
        let dir = tempfile::tempdir().unwrap();
        let ckpt = CheckpointManager::new(dir.path());
        let err = MlpClassifier::from_checkpoint(&ckpt, "absent", 8).err().unwrap();
        assert!(matches!(err, ArtifactError::Checkpoint { .. }));
    }

    #[test]
    fn test_zero_hidden_size_rejected() {
        let ckpt = CheckpointManager::new("unused");
        let err = MlpClassifier::from_checkpoint(&ckpt, "mlp", 0).err().unwrap();
        assert!(matches!(err, ArtifactError::InvalidParameters(_)));
    }
}
