// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Workflow coordination only:
//   - No shuffling or copying here (that's Layer 4)
//   - No printing here (that's Layer 1)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The partition workflow
pub mod split_use_case;

// The split directory summary workflow
pub mod inspect_use_case;
