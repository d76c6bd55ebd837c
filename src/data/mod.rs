/// Data layer: planet records, catalog loading, lookup and image resolution.
///
/// Architecture:
/// ```text
///   planets.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Catalog (fail-fast on bad lines)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │   Catalog     │  lowercase name → PlanetRecord, read-only
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  images   │  record → Option<images/<key>.jpg>
///   └──────────┘
/// ```

pub mod error;
pub mod images;
pub mod loader;
pub mod model;

pub use error::{CatalogError, FormatReason};
pub use model::{Catalog, PlanetRecord};
