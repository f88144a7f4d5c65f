use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::types::{
    BucketLocationConstraint, CreateBucketConfiguration, PublicAccessBlockConfiguration,
    ServerSideEncryption, ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration,
    ServerSideEncryptionRule,
};
use common::{Error, Result};
use tracing::info;

use super::S3Manager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketProbe {
    Exists,
    Missing,
}

/// The slice of the bucket-management API the provisioner needs.
#[async_trait]
pub trait BucketApi: Send + Sync {
    /// Metadata probe, not a listing. Only a clean "not found" maps to
    /// `Missing`; anything else (permissions, network) is an error.
    async fn probe_bucket(&self, bucket: &str) -> Result<BucketProbe>;
    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;
    async fn block_public_access(&self, bucket: &str) -> Result<()>;
    async fn enable_default_encryption(&self, bucket: &str) -> Result<()>;
}

/// Guarantees a hardened bucket with this name exists before returning.
///
/// Re-running against an existing bucket performs only the probe. When the
/// bucket is missing it is created, then public access is blocked and default
/// encryption enabled, in that order. A partial failure leaves the bucket
/// partially hardened; the next run's probe sees it as existing, so hardening
/// is not retried.
pub async fn ensure_bucket(api: &dyn BucketApi, bucket: &str, region: &str) -> Result<()> {
    match api.probe_bucket(bucket).await? {
        BucketProbe::Exists => {
            info!(bucket, "Bucket exists, reusing it");
        }
        BucketProbe::Missing => {
            info!(bucket, region, "Bucket not found, creating");
            api.create_bucket(bucket, region).await?;
            api.block_public_access(bucket).await?;
            api.enable_default_encryption(bucket).await?;
            info!(
                bucket,
                region, "Bucket created with encryption and blocked public access"
            );
        }
    }
    Ok(())
}

#[async_trait]
impl BucketApi for S3Manager {
    async fn probe_bucket(&self, bucket: &str) -> Result<BucketProbe> {
        match self.client().head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(BucketProbe::Exists),
            Err(SdkError::ServiceError(err)) if err.err().is_not_found() => {
                Ok(BucketProbe::Missing)
            }
            Err(e) => Err(Error::Storage(format!(
                "Cannot access bucket '{}': {}",
                bucket, e
            ))),
        }
    }

    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()> {
        let mut request = self.client().create_bucket().bucket(bucket);

        // us-east-1 rejects an explicit CreateBucketConfiguration
        if region != "us-east-1" {
            let constraint = BucketLocationConstraint::from(region);
            let config = CreateBucketConfiguration::builder()
                .location_constraint(constraint)
                .build();
            request = request.create_bucket_configuration(config);
        }

        request.send().await?;
        Ok(())
    }

    async fn block_public_access(&self, bucket: &str) -> Result<()> {
        let config = PublicAccessBlockConfiguration::builder()
            .block_public_acls(true)
            .ignore_public_acls(true)
            .block_public_policy(true)
            .restrict_public_buckets(true)
            .build();

        self.client()
            .put_public_access_block()
            .bucket(bucket)
            .public_access_block_configuration(config)
            .send()
            .await?;
        Ok(())
    }

    async fn enable_default_encryption(&self, bucket: &str) -> Result<()> {
        let by_default = ServerSideEncryptionByDefault::builder()
            .sse_algorithm(ServerSideEncryption::Aes256)
            .build()?;
        let rule = ServerSideEncryptionRule::builder()
            .apply_server_side_encryption_by_default(by_default)
            .build();
        let config = ServerSideEncryptionConfiguration::builder()
            .rules(rule)
            .build()?;

        self.client()
            .put_bucket_encryption()
            .bucket(bucket)
            .server_side_encryption_configuration(config)
            .send()
            .await?;
        Ok(())
    }
}
