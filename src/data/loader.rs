use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::error::{LoadError, ShapeError, json_kind};

/// Top-level mapping of record key → record, in source order.
pub type Document = Map<String, JsonValue>;

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Read a records document from disk.
///
/// Expected layout:
///
/// ```json
/// {
///   "0": { "data": [12.5, -3.1, 0.42] },
///   "1": { "data": [12.7, -3.0, 0.40, 0.99] },
///   ...
/// }
/// ```
///
/// The file is read in one go and closed before parsing, so a parse failure
/// never leaves a handle open. Bytes that are not UTF-8 are a parse error.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let root: JsonValue = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match root {
        JsonValue::Object(records) => {
            log::debug!("{}: {} records", path.display(), records.len());
            Ok(records)
        }
        other => Err(ShapeError::NotAnObject {
            found: json_kind(&other),
        }
        .into()),
    }
}
