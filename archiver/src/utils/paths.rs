use chrono::{DateTime, Utc};

/// Builds the local file name and the date-partitioned object key for one
/// snapshot instant.
///
/// The local name is flat while the remote key carries the `raw/YYYY/MM/DD`
/// partition. That divergence is deliberate and must stay: downstream readers
/// expect the partitioned layout, the local copy is a scratch artifact.
pub struct KeyBuilder {
    city: String,
    instant: DateTime<Utc>,
}

impl KeyBuilder {
    pub fn new(city: &str, instant: DateTime<Utc>) -> Self {
        Self {
            city: city.to_string(),
            instant,
        }
    }

    /// Second-granularity UTC timestamp, e.g. `20260828T070509Z`. Two runs
    /// inside the same second for the same city collide on purpose.
    pub fn timestamp(&self) -> String {
        self.instant.format("%Y%m%dT%H%M%SZ").to_string()
    }

    pub fn local_file_name(&self) -> String {
        format!("{}_{}.json", self.city, self.timestamp())
    }

    pub fn object_key(&self) -> String {
        format!(
            "raw/{}/{}/{}",
            self.instant.format("%Y/%m/%d"),
            self.city,
            self.local_file_name()
        )
    }

    pub fn s3_uri(&self, bucket: &str) -> String {
        format!("s3://{}/{}", bucket, self.object_key())
    }
}
