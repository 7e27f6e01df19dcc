// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts:
// a passenger, the feature vector built from it, the category
// maps used to label it, and the prediction made about it.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or terminal code
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Passenger attributes, category maps, feature vector
pub mod passenger;

// Survival outcome and confidence
pub mod prediction;

// The Classifier abstraction every estimator implements
pub mod traits;
