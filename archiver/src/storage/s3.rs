use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use common::Result;
use std::path::Path;
use std::sync::Arc;

use crate::storage::S3Manager;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(&self, key: &str, data: &[u8]) -> Result<()>;
    async fn upload_file(&self, path: &Path, key: &str) -> Result<()>;
    fn bucket(&self) -> &str;
}

// Implement for S3
pub struct S3Storage {
    bucket: String,
    client: Arc<S3Client>,
}

impl S3Storage {
    pub fn new(manager: &S3Manager, bucket: &str) -> Self {
        Self {
            client: manager.client(),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn put_object(&self, key: &str, data: &[u8]) -> Result<()> {
        let body = Bytes::copy_from_slice(data);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body.into())
            .send()
            .await?;

        Ok(())
    }

    async fn upload_file(&self, path: &Path, key: &str) -> Result<()> {
        let data = tokio::fs::read(path).await?;
        self.put_object(key, &data).await
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
