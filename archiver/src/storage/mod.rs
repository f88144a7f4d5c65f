pub mod provision;
pub mod s3;

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_s3::Client as S3Client;
use common::config::Settings;
use std::sync::Arc;

/// Owns the shared S3 client for the configured region.
///
/// Credentials come from the default AWS chain. An endpoint override (MinIO,
/// localstack) switches to path-style addressing since those servers do not
/// resolve virtual-hosted bucket names.
#[derive(Clone)]
pub struct S3Manager {
    client: Arc<S3Client>,
    region: String,
}

impl S3Manager {
    pub async fn new(settings: &Settings) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.aws_region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &settings.s3_endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Arc::new(S3Client::from_conf(builder.build())),
            region: settings.aws_region.clone(),
        }
    }

    pub fn client(&self) -> Arc<S3Client> {
        self.client.clone()
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}
