/// Data layer: loading, shape checks, and the point table.
///
/// Architecture:
/// ```text
///   records.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → ordered JSON object
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  extract  │  record["data"][0..3] → (x, y, z)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ PointTable │  x / y / z columns, one row per record
///   └────────────┘
/// ```

pub mod error;
pub mod extract;
pub mod loader;
pub mod model;

use std::path::Path;

use error::LoadError;
use model::PointTable;

/// Run the whole data pipeline for one file.
pub fn load_table(path: &Path) -> Result<PointTable, LoadError> {
    let document = loader::load_document(path)?;
    let points = extract::extract_points(&document)?;
    let table = PointTable::from_points(&points);

    log::info!("Loaded {} points from {}", table.len(), path.display());
    Ok(table)
}
