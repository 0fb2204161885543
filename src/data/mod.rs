/// Data layer: core types, the startup fetch, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   character API (one GET)
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  HTTP + JSON → Vec<CharacterRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ CharacterDataset  │  records, unique value lists
///   └──────────────────┘
///        │
///        ├────────────────────┐
///        ▼                    ▼
///   ┌──────────┐        ┌──────────┐
///   │  filter   │        │  charts   │
///   │ criteria →│        │ aggregate │
///   │  indices  │        │  → counts │
///   └──────────┘        └──────────┘
/// ```

pub mod charts;
pub mod fetch;
pub mod filter;
pub mod model;
