use chrono::{DateTime, Utc};
use serde_json::Value;

/// One fetched weather observation for a city at a point in time.
///
/// The payload is whatever the API returned. No schema is imposed on it
/// beyond being valid JSON.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub city: String,
    pub fetched_at: DateTime<Utc>,
    pub payload: Value,
}

impl WeatherSnapshot {
    pub fn new(city: &str, payload: Value) -> Self {
        Self {
            city: city.to_string(),
            fetched_at: Utc::now(),
            payload,
        }
    }
}
