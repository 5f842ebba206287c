// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything that touches the dataset on disk.
//
//   dataset root
//       │
//       ▼
//   DirectoryScanner  → class directories + sample file names
//       │
//       ▼
//   splitter          → shuffle and slice into train/test/valid
//       │
//       ▼
//   FileCopier        → copy into <split>/<class>/<file>
//
// Partitioner drives the three steps for every class.
// Inspector reads a finished split directory back.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §13 (Iterators and Closures)

/// Lists class directories and their sample files
pub mod scanner;

/// Shuffles and splits samples into train/test/valid
pub mod splitter;

/// Copies samples into the split output trees
pub mod copier;

/// Runs scanning, splitting and copying for a whole dataset
pub mod partitioner;

/// Summarises a split directory the way an image loader reads it
pub mod inspector;
