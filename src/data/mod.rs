/// Data layer: core types, loading, filtering, and sorting.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → MovieDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MovieDataset  │  Vec<Movie>, unique-value indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ───▶ │   sort    │  criteria → indices → ordered view
///   └──────────┘      └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod sort;
