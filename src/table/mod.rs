/// Table layer: payload normalization and display layout.
///
/// Architecture:
/// ```text
///  CSV text / JSON text / JSON value
///        │
///        ▼
///   ┌───────────┐
///   │ normalize │  RawInput → Table (headers, rows)
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   grid   │  Table → DisplayGrid (padded, shaded rows)
///   └──────────┘
/// ```

pub mod grid;
pub mod model;
pub mod normalize;
