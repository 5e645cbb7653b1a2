use serde_json::Value as JsonValue;

use super::error::{ShapeError, json_kind};
use super::loader::Document;

/// Pull `(x, y, z)` out of every record's `data` array, in document order.
///
/// Only the first three values are read; trailing values are ignored.
/// Fewer than three values is an error rather than a padded row.
pub fn extract_points(document: &Document) -> Result<Vec<[f64; 3]>, ShapeError> {
    document
        .iter()
        .map(|(key, record)| extract_record(key, record))
        .collect()
}

fn extract_record(key: &str, record: &JsonValue) -> Result<[f64; 3], ShapeError> {
    let obj = record
        .as_object()
        .ok_or_else(|| ShapeError::RecordNotAnObject {
            key: key.to_string(),
            found: json_kind(record),
        })?;

    let data = obj.get("data").ok_or_else(|| ShapeError::MissingData {
        key: key.to_string(),
    })?;

    let values = data
        .as_array()
        .ok_or_else(|| ShapeError::DataNotASequence {
            key: key.to_string(),
            found: json_kind(data),
        })?;

    if values.len() < 3 {
        return Err(ShapeError::TooFewValues {
            key: key.to_string(),
            len: values.len(),
        });
    }

    let mut point = [0.0; 3];
    for (index, (slot, value)) in point.iter_mut().zip(values).enumerate() {
        *slot = value.as_f64().ok_or_else(|| ShapeError::NotANumber {
            key: key.to_string(),
            index,
            found: json_kind(value),
        })?;
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document(value: JsonValue) -> Document {
        match value {
            JsonValue::Object(map) => map,
            other => panic!("test document must be an object, got {other}"),
        }
    }

    #[test]
    fn extracts_in_document_order() {
        let doc = document(json!({
            "b": {"data": [4, 5, 6]},
            "a": {"data": [1, 2, 3]},
        }));
        assert_eq!(
            extract_points(&doc).unwrap(),
            vec![[4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]
        );
    }

    #[test]
    fn ignores_values_past_the_third() {
        let doc = document(json!({
            "a": {"data": [1.5, -2.25, 3e2, "tag", null, 7]},
        }));
        assert_eq!(extract_points(&doc).unwrap(), vec![[1.5, -2.25, 300.0]]);
    }

    #[test]
    fn other_record_fields_are_ignored() {
        let doc = document(json!({
            "a": {"name": "first", "data": [1, 2, 3], "score": 0.5},
        }));
        assert_eq!(extract_points(&doc).unwrap(), vec![[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn two_values_is_too_few() {
        let doc = document(json!({
            "a": {"data": [1, 2, 3]},
            "b": {"data": [4, 5]},
        }));
        assert_eq!(
            extract_points(&doc).unwrap_err(),
            ShapeError::TooFewValues {
                key: "b".into(),
                len: 2
            }
        );
    }

    #[test]
    fn missing_data_field() {
        let doc = document(json!({"a": {"points": [1, 2, 3]}}));
        assert_eq!(
            extract_points(&doc).unwrap_err(),
            ShapeError::MissingData { key: "a".into() }
        );
    }

    #[test]
    fn data_must_be_an_array() {
        let doc = document(json!({"a": {"data": {"x": 1, "y": 2, "z": 3}}}));
        assert_eq!(
            extract_points(&doc).unwrap_err(),
            ShapeError::DataNotASequence {
                key: "a".into(),
                found: "an object"
            }
        );
    }

    #[test]
    fn record_must_be_an_object() {
        let doc = document(json!({"a": [1, 2, 3]}));
        assert_eq!(
            extract_points(&doc).unwrap_err(),
            ShapeError::RecordNotAnObject {
                key: "a".into(),
                found: "an array"
            }
        );
    }

    #[test]
    fn non_numeric_coordinate() {
        let doc = document(json!({"a": {"data": [1, "2", 3]}}));
        assert_eq!(
            extract_points(&doc).unwrap_err(),
            ShapeError::NotANumber {
                key: "a".into(),
                index: 1,
                found: "a string"
            }
        );
    }

    #[test]
    fn empty_document() {
        assert!(extract_points(&Document::new()).unwrap().is_empty());
    }
}
