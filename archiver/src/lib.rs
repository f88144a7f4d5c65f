pub mod archive;
pub mod models;
pub mod storage;
pub mod utils;
pub mod weather;

use std::sync::Arc;

use common::Result;
use common::config::Settings;

use archive::Archiver;
use storage::S3Manager;
use storage::provision::{self, BucketApi};
use storage::s3::{ObjectStorage, S3Storage};
use weather::WeatherClient;

/// Runs the complete archive pipeline
pub async fn run_archive_pipeline(config_path: &str) -> Result<()> {
    // Load configuration
    let config = Settings::new(config_path)?;

    let manager = S3Manager::new(&config).await;
    let storage: Arc<dyn ObjectStorage> = Arc::new(S3Storage::new(&manager, &config.bucket_name));
    let archiver = Archiver::new(storage);
    let weather = WeatherClient::new(&config)?;

    run_pipeline(&manager, &archiver, &weather, &config).await
}

/// Provision, fetch, archive. Strictly in order, the first error wins and
/// nothing is rolled back.
async fn run_pipeline(
    bucket_api: &dyn BucketApi,
    archiver: &Archiver,
    weather: &WeatherClient,
    config: &Settings,
) -> Result<()> {
    provision::ensure_bucket(bucket_api, &config.bucket_name, &config.aws_region).await?;

    let snapshot = weather.fetch_current(&config.city).await?;

    let key = archiver.archive(&snapshot).await?;
    println!(
        "Archived {} snapshot at: s3://{}/{}",
        config.city, config.bucket_name, key
    );

    Ok(())
}
