//! Object storage for uploaded files.
//!
//! Entirely independent of the token protocol; the API layer talks to the
//! [`ObjectStorage`] trait so tests can run without a bucket.

mod s3;

use async_trait::async_trait;
use thiserror::Error;

pub use s3::S3ObjectStorage;

/// Object storage failures
#[derive(Error, Debug)]
pub enum ObjectStorageError {
    #[error("upload failed: {message}")]
    Upload { message: String },
}

/// Blob storage contract: bytes in, durably stored object out.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError>;
}
