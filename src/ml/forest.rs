// ============================================================
// Layer 5 — Random Forest Estimator
// ============================================================
// A fitted ensemble of binary decision trees, flattened to JSON.
//
// Each tree is an array of nodes; node 0 is the root:
//
//   {"type": "split", "feature": 0, "threshold": 1.5, "left": 1, "right": 2}
//   {"type": "leaf",  "value": [12.0, 3.0]}
//
// Traversal goes LEFT when x[feature] <= threshold.
// A leaf's value holds per-class sample counts (or weights);
// normalising it gives that tree's class probabilities, and the
// forest averages the per-tree probabilities.
//
// Children must have larger indices than their parent. This is
// checked at load time and guarantees every walk terminates.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::passenger::FEATURE_COUNT;
use crate::domain::traits::Classifier;
use crate::infra::artifact::ArtifactError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature:   usize,
        threshold: f64,
        left:      usize,
        right:     usize,
    },
    Leaf {
        value: [f64; 2],
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    fn validate(&self, tree: usize) -> Result<(), ArtifactError> {
        let invalid = |msg: String| ArtifactError::InvalidParameters(format!("tree {tree}: {msg}"));

        if self.nodes.is_empty() {
            return Err(invalid("has no nodes".to_string()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split { feature, threshold, left, right } => {
                    if feature >= FEATURE_COUNT {
                        return Err(invalid(format!("node {i} splits on feature {feature}")));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(format!("node {i} has a non-finite threshold")));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(invalid(format!("node {i} has invalid child {child}")));
                        }
                    }
                }
                Node::Leaf { value } => {
                    let total = value[0] + value[1];
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) || total <= 0.0 {
                        return Err(invalid(format!("node {i} has an invalid leaf value")));
                    }
                }
            }
        }
        Ok(())
    }

    /// Class probabilities of the leaf this sample falls into
    pub fn leaf_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2]> {
        let mut i = 0;
        loop {
            match self.nodes.get(i) {
                Some(Node::Split { feature, threshold, left, right }) => {
                    i = if features[*feature] <= *threshold { *left } else { *right };
                }
                Some(Node::Leaf { value }) => {
                    let total = value[0] + value[1];
                    return Ok([value[0] / total, value[1] / total]);
                }
                None => bail!("decision tree walked off the end at node {i}"),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::InvalidParameters("random forest has no trees".to_string()));
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(i, tree)| tree.validate(i))
    }
}

impl Classifier for RandomForest {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<[f64; 2]> {
        let mut sum = [0.0; 2];
        for tree in &self.trees {
            let p = tree.leaf_proba(features)?;
            sum[0] += p[0];
            sum[1] += p[1];
        }
        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }
}
