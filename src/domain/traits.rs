// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The Predictor Adapter only ever talks to a `Classifier`.
// Every estimator kind the artifact loader understands
// (logistic regression, random forest, burn MLP) implements it,
// and so does the loaded model handle that wraps them.
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::passenger::FEATURE_COUNT;
use crate::domain::prediction::Survival;

// ─── Classifier ───────────────────────────────────────────────────────────────
/// A binary classifier over the seven passenger features.
///
/// Implementations:
///   - LogisticRegression → ml::linear
///   - RandomForest       → ml::forest
///   - MlpClassifier      → ml::inferencer (burn)
///   - LoadedModel        → infra::artifact (scaler + any of the above)
pub trait Classifier {
    /// Per-class probabilities `[P(did not survive), P(survived)]`.
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2]>;

    /// The predicted class label.
    /// Defaults to the arg-max of `predict_proba`.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Survival> {
        Ok(Survival::from_probabilities(&self.predict_proba(features)?))
    }
}
