//! The structured invocation surface.

use serde::{Deserialize, Serialize};

/// A request naming the file to fetch and the fields to mask.
///
/// Serializes to the same JSON event shape the tool accepts from callers:
///
/// ```json
/// {
///   "file_to_obfuscate": "s3://my_bucket/file1.csv",
///   "pii_fields": ["name", "email_address"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObfuscationRequest {
    /// Full `s3://bucket/key` reference of the file to obfuscate.
    pub file_to_obfuscate: String,
    /// Names of the fields whose values are replaced with the mask token.
    pub pii_fields: Vec<String>,
}

impl ObfuscationRequest {
    /// Build a request from a location string and field list.
    pub fn new(file_to_obfuscate: impl Into<String>, pii_fields: Vec<String>) -> Self {
        Self {
            file_to_obfuscate: file_to_obfuscate.into(),
            pii_fields,
        }
    }
}
