// ============================================================
// Layer 5 — ML / Estimator Layer
// ============================================================
// The estimator kinds a model artifact can contain. Each one
// implements the domain `Classifier` trait; nothing above this
// layer knows which kind it is talking to.
//
//   linear.rs     : logistic regression (pure Rust, JSON params)
//   forest.rs     : random forest of flattened decision trees
//   model.rs      : the burn multilayer perceptron architecture
//   inferencer.rs : runs the MLP on burn's NdArray CPU backend
//
// Only model.rs, inferencer.rs and infra/checkpoint.rs import
// burn directly.
//
// Reference: Burn Book §3 (Building Blocks)

/// Logistic regression estimator
pub mod linear;

/// Random forest estimator
pub mod forest;

/// Burn MLP architecture
pub mod model;

/// Burn MLP inference
pub mod inferencer;
