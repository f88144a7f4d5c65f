use std::path::PathBuf;
use std::sync::Arc;

use common::Result;
use tracing::info;

use crate::models::WeatherSnapshot;
use crate::storage::s3::ObjectStorage;
use crate::utils::paths::KeyBuilder;

/// Persists a snapshot: pretty-printed JSON to a flat local file, then an
/// upload of that file under the date-partitioned key.
pub struct Archiver {
    storage: Arc<dyn ObjectStorage>,
    local_dir: PathBuf,
}

impl Archiver {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            storage,
            local_dir: PathBuf::from("."),
        }
    }

    pub fn with_local_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_dir = dir.into();
        self
    }

    /// The local copy is left in place after the upload, success or not.
    pub async fn archive(&self, snapshot: &WeatherSnapshot) -> Result<String> {
        let keys = KeyBuilder::new(&snapshot.city, snapshot.fetched_at);
        let file_name = keys.local_file_name();
        let local_path = self.local_dir.join(&file_name);

        let pretty = serde_json::to_string_pretty(&snapshot.payload)?;
        tokio::fs::write(&local_path, &pretty).await?;

        let key = keys.object_key();
        self.storage.upload_file(&local_path, &key).await?;

        info!(
            file = %file_name,
            uri = %keys.s3_uri(self.storage.bucket()),
            "Uploaded snapshot"
        );
        Ok(key)
    }
}
