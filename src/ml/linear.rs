// ============================================================
// Layer 5 — Logistic Regression Estimator
// ============================================================
// The classic Titanic baseline. Parameters come straight from a
// fitted binary logistic regression:
//
//   z = intercept + Σ coefficients[i] · x[i]
//   P(survived) = 1 / (1 + e^-z)
//
// Predict returns "survived" iff z > 0, which is the same as
// arg-max over the two probabilities with ties going to class 0.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::passenger::FEATURE_COUNT;
use crate::domain::prediction::Survival;
use crate::domain::traits::Classifier;
use crate::infra::artifact::ArtifactError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per feature, in feature-vector order
    pub coefficients: Vec<f64>,
    pub intercept:    f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(ArtifactError::InvalidParameters(format!(
                "logistic regression has {} coefficients, expected {FEATURE_COUNT}",
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::InvalidParameters(
                "logistic regression parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// The decision function `z`
    pub fn decision(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

fn sigmoid(z: f64) -> f64 {
    // Split on sign so neither branch overflows exp()
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticRegression {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2]> {
        let p = sigmoid(self.decision(features));
        Ok([1.0 - p, p])
    }

    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Survival> {
        Ok(if self.decision(features) > 0.0 {
            Survival::Survived
        } else {
            Survival::DidNotSurvive
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LogisticRegression {
        LogisticRegression {
            coefficients: vec![-1.10, -2.60, -0.040, -0.33, -0.09, 0.0025, -0.20],
            intercept:    4.35,
        }
    }

    #[test]
    fn test_known_probability() {
        let x = [2.0, 1.0, 30.0, 1.0, 0.0, 100.0, 2.0];
        let m = model();
        assert!((m.decision(&x) - (-2.13)).abs() < 1e-9);
        let [p0, p1] = m.predict_proba(&x).unwrap();
        assert!((p1 - 0.106_215).abs() < 1e-6);
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
        assert_eq!(m.predict(&x).unwrap(), Survival::DidNotSurvive);
    }

    #[test]
    fn test_zero_decision_is_class_zero() {
        let m = LogisticRegression { coefficients: vec![0.0; FEATURE_COUNT], intercept: 0.0 };
        let x = [0.0; FEATURE_COUNT];
        assert_eq!(m.predict(&x).unwrap(), Survival::DidNotSurvive);
        assert_eq!(m.predict_proba(&x).unwrap(), [0.5, 0.5]);
    }

    #[test]
    fn test_sigmoid_extremes_stay_finite() {
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
    }

    #[test]
    fn test_wrong_coefficient_count_rejected() {
        let m = LogisticRegression { coefficients: vec![1.0; 6], intercept: 0.0 };
        assert!(matches!(m.validate(), Err(ArtifactError::InvalidParameters(_))));
        assert!(model().validate().is_ok());
    }
}
