use std::time::Duration;

use common::Result;
use common::config::Settings;
use tracing::info;

use crate::models::WeatherSnapshot;

/// One attempt, no retry. A stuck call is bounded by this timeout only.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_timeout(settings, REQUEST_TIMEOUT)
    }

    fn with_timeout(settings: &Settings, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: settings.weather_endpoint.clone(),
            api_key: settings.openweather_api_key.clone(),
        })
    }

    /// Fetches the current weather for a city, metric units. Any valid JSON
    /// body is accepted as-is; a non-2xx status or network fault is an error.
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        info!(city, "Weather data fetched");

        Ok(WeatherSnapshot::new(city, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Error;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> Settings {
        Settings {
            openweather_api_key: "test-key".to_string(),
            city: "Mumbai".to_string(),
            bucket_name: "mumbai-weather-data-001".to_string(),
            aws_region: "ap-south-1".to_string(),
            weather_endpoint: format!("{}/data/2.5/weather", server.uri()),
            s3_endpoint: None,
        }
    }

    #[tokio::test]
    async fn fetch_returns_opaque_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Mumbai"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"main": {"temp": 27}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = WeatherClient::new(&settings_for(&server)).unwrap();
        let snapshot = client.fetch_current("Mumbai").await.unwrap();

        assert_eq!(snapshot.city, "Mumbai");
        assert_eq!(snapshot.payload, json!({"main": {"temp": 27}}));
    }

    #[tokio::test]
    async fn non_2xx_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = WeatherClient::new(&settings_for(&server)).unwrap();
        let err = client.fetch_current("Mumbai").await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"main": {"temp": 27}}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client =
            WeatherClient::with_timeout(&settings_for(&server), Duration::from_millis(50)).unwrap();
        let err = client.fetch_current("Mumbai").await.unwrap_err();
        match err {
            Error::Http(e) => assert!(e.is_timeout()),
            other => panic!("expected an HTTP timeout, got {other}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
            )
            .mount(&server)
            .await;

        let client = WeatherClient::new(&settings_for(&server)).unwrap();
        assert!(client.fetch_current("Mumbai").await.is_err());
    }
}
