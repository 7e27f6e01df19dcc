// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Restores MLP weights saved with Burn's CompactRecorder.
//
// The model manifest names the checkpoint by stem, relative to
// the manifest's own directory:
//
//   models/
//     reference_model.json      ← manifest ("weights": "survival_mlp")
//     survival_mlp.mpk.gz       ← weights written by CompactRecorder
//
// The architecture (hidden_size) lives in the manifest, so the
// model can be rebuilt before the weights are loaded into it.
// Loading fails if the recorded shapes don't match.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Stores floats at half precision, compressed with gzip
//   - Appends the .mpk.gz extension itself
//
// Reference: Burn Book §5 (Records and Checkpointing)

use std::path::PathBuf;
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::infra::artifact::ArtifactError;
use crate::ml::model::SurvivalMlp;

/// Loads MLP checkpoints stored in one directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of a checkpoint without the extension the recorder adds
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Restore weights into a freshly initialised model of the
    /// same architecture.
    pub fn load_model<B: Backend>(
        &self,
        model:  SurvivalMlp<B>,
        name:   &str,
        device: &B::Device,
    ) -> Result<SurvivalMlp<B>, ArtifactError> {
        let path = self.path_of(name);
        tracing::info!("Loading MLP checkpoint '{}'", path.display());

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .map_err(|e| ArtifactError::Checkpoint {
                path:   path.clone(),
                reason: e.to_string(),
            })?;

        Ok(model.load_record(record))
    }
}

// Checkpoints are produced offline; only the tests write them.
#[cfg(test)]
impl CheckpointManager {
    /// Write model weights to {dir}/{name}.mpk.gz
    pub fn save_model<B: Backend>(&self, model: &SurvivalMlp<B>, name: &str) -> anyhow::Result<()> {
        use anyhow::Context;

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path_of(name);
        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save checkpoint to '{}'", path.display()))?;

        tracing::debug!("Saved checkpoint '{}'", path.display());
        Ok(())
    }
}
