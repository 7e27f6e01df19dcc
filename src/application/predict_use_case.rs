// ============================================================
// Layer 2 — Predict Use Case (the Predictor Adapter)
// ============================================================
// Turns one set of form inputs into a user-facing answer:
//
//   Step 1: Assemble the feature vector   (Layer 3 - domain)
//   Step 2: predict → class label         (Layer 5 - ml, via trait)
//   Step 3: predict_proba → probabilities (Layer 5 - ml, via trait)
//   Step 4: confidence = P(label) × 100
//
// The model handle is passed in at construction and owned here
// for the rest of the run. There is no global model state.

use anyhow::{ensure, Result};

use crate::domain::passenger::Passenger;
use crate::domain::prediction::Prediction;
use crate::domain::traits::Classifier;

pub struct SurvivalPredictor<C: Classifier> {
    model: C,
}

impl<C: Classifier> SurvivalPredictor<C> {
    pub fn new(model: C) -> Self {
        Self { model }
    }

    /// One synchronous inference for one passenger.
    pub fn predict(&self, passenger: &Passenger) -> Result<Prediction> {
        let features = passenger.to_features();
        tracing::debug!(?features, "Assembled feature vector");

        let outcome = self.model.predict(features.values())?;
        let proba   = self.model.predict_proba(features.values())?;

        ensure!(
            proba.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p)),
            "model returned probabilities outside [0, 1]: {proba:?}"
        );
        ensure!(
            (proba[0] + proba[1] - 1.0).abs() < 1e-3,
            "model probabilities do not sum to 1: {proba:?}"
        );

        let prediction = Prediction {
            outcome,
            confidence: proba[outcome.index()] * 100.0,
        };
        tracing::debug!(
            "Prediction: {:?} at {:.2}%",
            prediction.outcome,
            prediction.confidence
        );
        Ok(prediction)
    }
}
