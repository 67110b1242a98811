//! S3 location parsing.

use std::fmt;

use crate::error::{Result, ScrubError};

const SCHEME: &str = "s3://";

/// A parsed `s3://bucket/key` reference.
///
/// Parsing is a pure string operation; no network access is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Location {
    pub bucket: String,
    pub key: String,
}

impl S3Location {
    /// Parse an `s3://bucket/key` string.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::InvalidLocation`] when the scheme prefix is
    /// absent, when no `/` separates bucket from key, or when either
    /// component is empty.
    pub fn parse(input: &str) -> Result<Self> {
        let Some(remainder) = input.strip_prefix(SCHEME) else {
            return Err(ScrubError::invalid_location(
                input,
                "must start with 's3://'",
            ));
        };
        let Some((bucket, key)) = remainder.split_once('/') else {
            return Err(ScrubError::invalid_location(
                input,
                "must include both bucket and key",
            ));
        };
        if bucket.is_empty() {
            return Err(ScrubError::invalid_location(input, "bucket must not be empty"));
        }
        if key.is_empty() {
            return Err(ScrubError::invalid_location(input, "key must not be empty"));
        }
        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

impl fmt::Display for S3Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let location = S3Location::parse("s3://test-bucket/sample.csv").unwrap();
        assert_eq!(location.bucket, "test-bucket");
        assert_eq!(location.key, "sample.csv");
    }

    #[test]
    fn test_parse_key_with_prefix() {
        let location = S3Location::parse("s3://my-bucket/new_data/file2.json").unwrap();
        assert_eq!(location.bucket, "my-bucket");
        assert_eq!(location.key, "new_data/file2.json");
    }

    #[test]
    fn test_parse_missing_scheme() {
        let err = S3Location::parse("invalid_path/sample.csv").unwrap_err();
        assert!(matches!(err, ScrubError::InvalidLocation { .. }));
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = S3Location::parse("s3://bucket-only").unwrap_err();
        assert!(matches!(err, ScrubError::InvalidLocation { .. }));
    }

    #[test]
    fn test_parse_empty_components() {
        assert!(S3Location::parse("s3:///sample.csv").is_err());
        assert!(S3Location::parse("s3://bucket/").is_err());
        assert!(S3Location::parse("").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let location = S3Location::parse("s3://test-bucket/sample.csv").unwrap();
        assert_eq!(location.to_string(), "s3://test-bucket/sample.csv");
    }
}
