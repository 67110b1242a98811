//! File format resolution from object key suffixes.

use std::fmt;

/// Supported on-disk formats, resolved from an object key's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Delimited text with a header row.
    Csv,
    /// A JSON array of objects.
    Json,
    /// Columnar binary table.
    Parquet,
}

impl FileFormat {
    /// All supported formats, in resolution order.
    pub const ALL: [FileFormat; 3] = [FileFormat::Csv, FileFormat::Json, FileFormat::Parquet];

    /// Resolve a format from the object key's suffix.
    ///
    /// The match is case-sensitive and content is never sniffed. An unknown
    /// suffix yields `None`; whether that is fatal is the caller's decision.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| key.ends_with(format.suffix()))
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Parquet => "parquet",
        }
    }

    /// Key suffix this format is resolved from.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Json => ".json",
            Self::Parquet => ".parquet",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known_suffixes() {
        assert_eq!(FileFormat::from_key("sample.csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_key("sample.json"), Some(FileFormat::Json));
        assert_eq!(
            FileFormat::from_key("sample.parquet"),
            Some(FileFormat::Parquet)
        );
    }

    #[test]
    fn test_from_key_unknown_suffix() {
        assert_eq!(FileFormat::from_key("sample.txt"), None);
        assert_eq!(FileFormat::from_key("sample"), None);
        assert_eq!(FileFormat::from_key(""), None);
    }

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert_eq!(FileFormat::from_key("SAMPLE.CSV"), None);
        assert_eq!(FileFormat::from_key("sample.Json"), None);
    }

    #[test]
    fn test_from_key_nested_key() {
        assert_eq!(
            FileFormat::from_key("new_data/file2.json"),
            Some(FileFormat::Json)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FileFormat::Csv.to_string(), "csv");
        assert_eq!(FileFormat::Parquet.to_string(), "parquet");
    }
}
