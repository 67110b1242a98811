//! Error types for the obfuscation pipeline.

use thiserror::Error;

use crate::format::FileFormat;

/// Errors that can occur while obfuscating a file.
///
/// Every variant is terminal for the invocation; nothing is retried and no
/// fallback value is substituted for an unreadable file.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// A required request field was absent or empty.
    #[error("missing input: '{field}' must be provided and non-empty")]
    MissingInput { field: &'static str },

    /// The file reference could not be parsed.
    #[error("invalid file location '{input}': {reason}")]
    InvalidLocation { input: String, reason: String },

    /// The object key suffix does not map to a supported format.
    #[error("unsupported file format: {key}")]
    UnsupportedFormat { key: String },

    /// The object does not exist in storage.
    #[error("file not found: s3://{bucket}/{key}")]
    FileNotFound { bucket: String, key: String },

    /// The payload could not be decoded as the resolved format.
    #[error("malformed {format} input: {message}")]
    MalformedInput { format: FileFormat, message: String },

    /// The masked records could not be serialized back to bytes.
    #[error("failed to encode {format} output: {message}")]
    EncodeFailure { format: FileFormat, message: String },

    /// A storage failure other than a missing object.
    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ScrubError>;

impl ScrubError {
    /// Create a MissingInput error.
    pub fn missing_input(field: &'static str) -> Self {
        Self::MissingInput { field }
    }

    /// Create an InvalidLocation error.
    pub fn invalid_location(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(key: impl Into<String>) -> Self {
        Self::UnsupportedFormat { key: key.into() }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self::FileNotFound {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Create a MalformedInput error.
    pub fn malformed_input(format: FileFormat, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            format,
            message: message.into(),
        }
    }

    /// Create an EncodeFailure error.
    pub fn encode_failure(format: FileFormat, message: impl Into<String>) -> Self {
        Self::EncodeFailure {
            format,
            message: message.into(),
        }
    }

    /// Create a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
