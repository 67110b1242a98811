//! JSON record-array codec.

use serde_json::{Map, Value};

use scrub_model::{FileFormat, MASKED_VALUE, Result, ScrubError};

/// Decoded record-array content: ordered records of ordered fields.
///
/// Field order within each record is insertion order and survives the
/// round trip.
pub type JsonRecords = Vec<Map<String, Value>>;

/// Parse a JSON array of objects.
///
/// Fails with `MalformedInput` when the payload is not valid JSON, the top
/// level is not an array, or an element is not an object.
pub fn decode(bytes: &[u8]) -> Result<JsonRecords> {
    serde_json::from_slice(bytes)
        .map_err(|error| ScrubError::malformed_input(FileFormat::Json, error.to_string()))
}

/// Overwrite the value at every named key present in each record.
///
/// The replacement is the string mask token regardless of the original
/// value's type; absent keys are untouched.
pub fn mask(records: &mut JsonRecords, fields: &[String]) {
    for record in records.iter_mut() {
        for field in fields {
            if let Some(value) = record.get_mut(field) {
                *value = Value::String(MASKED_VALUE.to_string());
            }
        }
    }
}

/// Serialize back to a 2-space-indented array.
pub fn encode(records: &JsonRecords) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(records)
        .map_err(|error| ScrubError::encode_failure(FileFormat::Json, error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": 1, "name": "John Smith", "email": "john.smith@email.com"},
        {"id": 2, "name": "Jane Doe", "email": "jane.doe@email.com"}
    ]"#;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn test_decode_array_of_objects() {
        let records = decode(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], Value::String("John Smith".to_string()));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(
            err,
            ScrubError::MalformedInput {
                format: FileFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_non_object_element() {
        assert!(decode(b"[1, 2, 3]").is_err());
        assert!(decode(b"not json at all").is_err());
    }

    #[test]
    fn test_mask_replaces_any_value_type() {
        let input = r#"[{"id": 7, "active": true, "score": null, "tags": ["a"], "name": "x"}]"#;
        let mut records = decode(input.as_bytes()).unwrap();
        mask(
            &mut records,
            &fields(&["id", "active", "score", "tags", "name"]),
        );
        for value in records[0].values() {
            assert_eq!(value, &Value::String(MASKED_VALUE.to_string()));
        }
    }

    #[test]
    fn test_mask_keeps_field_order() {
        let mut records = decode(SAMPLE.as_bytes()).unwrap();
        mask(&mut records, &fields(&["name"]));
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, vec!["id", "name", "email"]);
    }

    #[test]
    fn test_mask_absent_field_is_noop() {
        let mut records = decode(SAMPLE.as_bytes()).unwrap();
        let original = records.clone();
        mask(&mut records, &fields(&["ssn"]));
        assert_eq!(records, original);
    }

    #[test]
    fn test_encode_uses_two_space_indent() {
        let mut records = decode(SAMPLE.as_bytes()).unwrap();
        mask(&mut records, &fields(&["name", "email"]));
        let output = String::from_utf8(encode(&records).unwrap()).unwrap();
        insta::assert_snapshot!(output, @r#"
        [
          {
            "id": 1,
            "name": "***",
            "email": "***"
          },
          {
            "id": 2,
            "name": "***",
            "email": "***"
          }
        ]
        "#);
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let records = decode(SAMPLE.as_bytes()).unwrap();
        let encoded = encode(&records).unwrap();
        assert_eq!(decode(&encoded).unwrap(), records);
    }
}
