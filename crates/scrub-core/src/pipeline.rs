//! The obfuscation pipeline.
//!
//! Stages run strictly in order: validate the request, parse the location,
//! resolve the format, fetch the raw bytes, then decode, mask, and encode
//! through the matching codec. The invocation either completes in full or
//! fails; no partial output is ever returned.

use bytes::Bytes;
use tracing::{debug, info, info_span};

use scrub_codec::obfuscate_bytes;
use scrub_model::{FileFormat, ObfuscationRequest, Result, S3Location, ScrubError};
use scrub_store::{ObjectStorage, StoreError};

/// Fetch the referenced file and return it with the requested fields
/// masked, re-serialized in its original format.
///
/// # Errors
///
/// - [`ScrubError::MissingInput`] when either request field is empty.
/// - [`ScrubError::InvalidLocation`] when the reference is not
///   `s3://bucket/key`.
/// - [`ScrubError::UnsupportedFormat`] when the key suffix is not
///   recognized.
/// - [`ScrubError::FileNotFound`] when the object does not exist.
/// - [`ScrubError::MalformedInput`] / [`ScrubError::EncodeFailure`] from
///   the codec stages.
pub fn obfuscate(request: &ObfuscationRequest, storage: &dyn ObjectStorage) -> Result<Bytes> {
    if request.file_to_obfuscate.is_empty() {
        return Err(ScrubError::missing_input("file_to_obfuscate"));
    }
    if request.pii_fields.is_empty() {
        return Err(ScrubError::missing_input("pii_fields"));
    }
    let location = S3Location::parse(&request.file_to_obfuscate)?;
    let Some(format) = FileFormat::from_key(&location.key) else {
        return Err(ScrubError::unsupported_format(&location.key));
    };

    let span = info_span!(
        "obfuscate",
        bucket = %location.bucket,
        key = %location.key,
        format = %format
    );
    let _guard = span.enter();
    debug!(fields = request.pii_fields.len(), "request validated");

    let raw = fetch(storage, &location)?;
    info!(bytes = raw.len(), "fetched source object");

    let masked = obfuscate_bytes(format, &raw, &request.pii_fields)?;
    info!(bytes = masked.len(), "encoded masked output");
    Ok(Bytes::from(masked))
}

fn fetch(storage: &dyn ObjectStorage, location: &S3Location) -> Result<Bytes> {
    storage
        .fetch(&location.bucket, &location.key)
        .map_err(|error| match error {
            StoreError::NotFound { .. } => {
                ScrubError::file_not_found(&location.bucket, &location.key)
            }
            other => ScrubError::storage(other.to_string()),
        })
}
