// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Persistence that sits beside the partitioner:
//
//   config_file.rs - PartitionConfig as JSON, so a split can be
//                    described once and rerun with the same
//                    paths, ratios and seed.
//
//   manifest.rs    - JSON record of the split assignment of a
//                    run (which file went to which split).
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// PartitionConfig JSON loading and saving
pub mod config_file;

/// Split assignment manifest
pub mod manifest;
