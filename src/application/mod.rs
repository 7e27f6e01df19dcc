// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to answer one
// question: would this passenger have survived?
//
// Rules for this layer:
//   - No ML math or model code here
//   - No UI or printing here (that's Layer 1 and the ui layer)
//   - No direct file access (that's Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The prediction workflow
pub mod predict_use_case;
