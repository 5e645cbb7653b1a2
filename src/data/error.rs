use std::path::PathBuf;

use thiserror::Error;

/// Why a document could not be turned into a point table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// The document is valid JSON but not laid out as `{key: {"data": [x, y, z, ...]}}`.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("expected a top-level JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("record '{key}' is not a JSON object (found {found})")]
    RecordNotAnObject { key: String, found: &'static str },

    #[error("record '{key}' has no 'data' field")]
    MissingData { key: String },

    #[error("record '{key}': 'data' is not an array (found {found})")]
    DataNotASequence { key: String, found: &'static str },

    #[error("record '{key}': 'data' has {len} values, need at least 3")]
    TooFewValues { key: String, len: usize },

    #[error("record '{key}': data[{index}] is not a number (found {found})")]
    NotANumber {
        key: String,
        index: usize,
        found: &'static str,
    },
}

/// Short name of a JSON value's type, for error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
