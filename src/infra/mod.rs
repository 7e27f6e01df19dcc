// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the model files on disk:
//
//   artifact.rs   : Model manifest loading and schema validation
//                   Parses the JSON manifest, checks the feature
//                   names and parameter shapes, and builds the
//                   one read-only model handle for the run.
//
//   checkpoint.rs : Burn checkpoint loading
//                   Restores MLP weights saved with Burn's
//                   CompactRecorder.
//
// Reference: Rust Book §9 (Error Handling)
//            Burn Book §5 (Checkpointing)

/// Model manifest loading and validation
pub mod artifact;

/// MLP weight loading
pub mod checkpoint;
