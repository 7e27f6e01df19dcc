// ============================================================
// Layer 3 — Prediction Domain Types
// ============================================================
// What the classifier says about a passenger:
//   - a binary outcome (class 0 = did not survive, 1 = survived)
//   - the confidence: probability of that outcome, as a percentage
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Model class label. Discriminants match the class indices
/// of the trained model's probability vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Survival {
    DidNotSurvive = 0,
    Survived      = 1,
}

impl Survival {
    /// Index of this class in a probability vector
    pub fn index(self) -> usize {
        self as usize
    }

    /// Arg-max over `[P(did not survive), P(survived)]`.
    /// A tie resolves to the first class, as arg-max does.
    pub fn from_probabilities(proba: &[f64; 2]) -> Self {
        if proba[1] > proba[0] { Self::Survived } else { Self::DidNotSurvive }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Survived      => "Yes, you would survive! 🎉",
            Self::DidNotSurvive => "No, unfortunately you would not survive. 😔",
        }
    }
}

/// A formatted model answer for one passenger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub outcome: Survival,

    /// Probability of `outcome`, scaled to [0, 100]
    pub confidence: f64,
}

impl Prediction {
    pub fn survived(&self) -> bool {
        self.outcome == Survival::Survived
    }

    /// "Prediction Confidence: 89.38%"
    pub fn confidence_text(&self) -> String {
        format!("Prediction Confidence: {:.2}%", self.confidence)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.outcome.message(), self.confidence_text())
    }
}
