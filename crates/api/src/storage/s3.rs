use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::{join_url, ObjectStorage, StorageError};

/// Objects in an S3 bucket. Credentials come from the default AWS provider
/// chain.
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    pub async fn connect(bucket: &str, region: &str, public_base_url: Option<String>) -> Self {
        let sdk_config = aws_config::from_env()
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        let public_base_url = public_base_url
            .unwrap_or_else(|| format!("https://{bucket}.s3.{region}.amazonaws.com"));

        Self {
            client: Client::new(&sdk_config),
            bucket: bucket.to_string(),
            public_base_url,
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }

    // S3 deletes are idempotent and do not report whether the key existed.
    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(true)
    }

    fn url(&self, key: &str) -> String {
        join_url(&self.public_base_url, key)
    }
}
