use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// OpenWeather API credential. Required; everything else has a default.
    #[serde(default)]
    pub openweather_api_key: String,
    #[serde(default = "default_city")]
    pub city: String,
    // must be globally unique if changed
    #[serde(default = "default_bucket_name")]
    pub bucket_name: String,
    #[serde(default = "default_aws_region")]
    pub aws_region: String,
    #[serde(default = "default_weather_endpoint")]
    pub weather_endpoint: String,
    /// Endpoint override for MinIO/localstack runs. Implies path-style addressing.
    #[serde(default)]
    pub s3_endpoint: Option<String>,
}

fn default_city() -> String {
    "Mumbai".to_string()
}

fn default_bucket_name() -> String {
    "mumbai-weather-data-001".to_string()
}

fn default_aws_region() -> String {
    "ap-south-1".to_string()
}

fn default_weather_endpoint() -> String {
    "http://api.openweathermap.org/data/2.5/weather".to_string()
}

impl Settings {
    pub fn new(path: &str) -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::default());

        // Build the configuration
        let config = builder.build()?;

        // Try to deserialize the entire configuration
        let settings: Settings = config.try_deserialize()?;

        debug!(
            city = %settings.city,
            bucket = %settings.bucket_name,
            region = %settings.aws_region,
            "Loaded settings"
        );

        settings.validate()
    }

    /// Rejects a missing credential before any client gets built.
    pub fn validate(self) -> Result<Self> {
        if self.openweather_api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(self)
    }
}
