use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current conditions reshaped for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub location: String,
    pub temp_c: i64,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: f64,
}

/// Coarse failure causes for the /weather endpoint. The `Display` strings
/// are part of the frontend contract.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport failure or non-success status from the provider.
    #[error("API request failed")]
    Request(#[source] reqwest::Error),
    /// Payload did not decode into the expected shape.
    #[error("Invalid response format")]
    Format(#[source] serde_json::Error),
    /// Expected field absent from an otherwise well-formed payload.
    #[error("Invalid response format")]
    MissingField,
    /// Failures outside the taxonomy above, e.g. a body read cut short.
    #[error("Unexpected error")]
    Unexpected(#[source] reqwest::Error),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_status() || err.is_request() {
            WeatherError::Request(err)
        } else {
            WeatherError::Unexpected(err)
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    name: String,
    main: MainFields,
    weather: Vec<ConditionEntry>,
    wind: WindFields,
}

#[derive(Debug, Deserialize)]
struct MainFields {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindFields {
    speed: f64,
}

/// Client for the weather provider (OpenWeatherMap), pinned to one city.
pub struct WeatherClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
    city: String,
}

impl WeatherClient {
    pub fn new(
        api_key: String,
        base_url: String,
        city: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
            city,
        })
    }

    /// Fetches current conditions for the configured city and reshapes them
    /// into a `WeatherReading`. Temperature is rounded to the nearest whole
    /// degree Celsius.
    pub async fn current(&self) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'));

        let resp = self.http
            .get(&url)
            .query(&[
                ("q", self.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = resp.text().await?;
        let parsed: CurrentConditions =
            serde_json::from_str(&body).map_err(WeatherError::Format)?;

        let condition = parsed.weather
            .into_iter()
            .next()
            .map(|entry| entry.description)
            .ok_or(WeatherError::MissingField)?;

        Ok(WeatherReading {
            location: parsed.name,
            temp_c: parsed.main.temp.round() as i64,
            condition,
            humidity: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
        })
    }
}
