//! Blocking object-storage access for the scrub pipeline.
//!
//! The pipeline itself is fully synchronous; the async `object_store`
//! backends are driven on a current-thread runtime owned by each storage
//! handle, so callers never see a suspension point.

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::memory::InMemory;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};
use thiserror::Error;
use tokio::runtime::Runtime;
use tracing::info;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested object does not exist.
    #[error("object not found: {key}")]
    NotFound { key: String },

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(#[from] object_store::Error),

    /// Runtime construction failure.
    #[error("storage runtime error: {0}")]
    Io(#[from] std::io::Error),
}

/// Blocking byte retrieval from an object store.
pub trait ObjectStorage {
    /// Fetch the full contents of `key` in `bucket`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the object is absent and
    /// [`StoreError::Backend`] for any other backend failure.
    fn fetch(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError>;
}

/// S3-backed storage.
///
/// Credentials and region come from the ambient AWS environment variables;
/// a store handle is built per bucket at fetch time.
pub struct S3Storage {
    runtime: Runtime,
}

impl S3Storage {
    /// Create the storage handle and its runtime.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self {
            runtime: blocking_runtime()?,
        })
    }
}

impl ObjectStorage for S3Storage {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()?;
        info!(bucket, key, "downloading object");
        let path = ObjectPath::from(key);
        self.runtime
            .block_on(async { store.get(&path).await?.bytes().await })
            .map_err(|error| map_not_found(error, key))
    }
}

/// In-memory storage for tests and local experimentation.
///
/// Objects are namespaced as `bucket/key` inside a single backing store.
pub struct MemoryStorage {
    runtime: Runtime,
    store: InMemory,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self {
            runtime: blocking_runtime()?,
            store: InMemory::new(),
        })
    }

    /// Store an object so later fetches can find it.
    pub fn put(&self, bucket: &str, key: &str, bytes: impl Into<Bytes>) -> Result<(), StoreError> {
        let path = object_path(bucket, key);
        let payload = PutPayload::from(bytes.into());
        self.runtime.block_on(self.store.put(&path, payload))?;
        Ok(())
    }
}

impl ObjectStorage for MemoryStorage {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError> {
        let path = object_path(bucket, key);
        self.runtime
            .block_on(async { self.store.get(&path).await?.bytes().await })
            .map_err(|error| map_not_found(error, key))
    }
}

fn blocking_runtime() -> Result<Runtime, std::io::Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

fn object_path(bucket: &str, key: &str) -> ObjectPath {
    ObjectPath::from(format!("{bucket}/{key}"))
}

fn map_not_found(error: object_store::Error, key: &str) -> StoreError {
    match error {
        object_store::Error::NotFound { .. } => StoreError::NotFound {
            key: key.to_string(),
        },
        other => StoreError::Backend(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_put_then_fetch() {
        let storage = MemoryStorage::new().unwrap();
        storage
            .put("test-bucket", "sample.csv", &b"a,b\n1,2\n"[..])
            .unwrap();
        let bytes = storage.fetch("test-bucket", "sample.csv").unwrap();
        assert_eq!(bytes.as_ref(), b"a,b\n1,2\n");
    }

    #[test]
    fn test_memory_fetch_missing_is_not_found() {
        let storage = MemoryStorage::new().unwrap();
        let err = storage.fetch("test-bucket", "missing.csv").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { key } if key == "missing.csv"));
    }

    #[test]
    fn test_buckets_are_isolated() {
        let storage = MemoryStorage::new().unwrap();
        storage.put("bucket-a", "file.json", &b"[]"[..]).unwrap();
        assert!(storage.fetch("bucket-b", "file.json").is_err());
    }
}
