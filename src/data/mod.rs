/// Data layer: core types, loading, reduction and classification.
///
/// Architecture:
/// ```text
///  inflammation-NN.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  column mean / max / min, difference, composite
///   └──────────┘
///        │
///        ▼
///   render::figure
///
///   file names ──► classify ──► FilenameBuckets
/// ```

pub mod classify;
pub mod loader;
pub mod model;
pub mod stats;
