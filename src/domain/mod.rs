// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what a
// dataset split IS:
//   - the three splits and the ratios that size them
//   - a class directory's samples and its split assignment
//   - the errors a run can end with
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap or other presentation types
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Split enum, ratios and per-split counts
pub mod split;

/// Class samples, class plans and the run report
pub mod class_set;

/// Typed partition errors
pub mod error;

/// Core abstractions (traits) that other layers implement
pub mod traits;
