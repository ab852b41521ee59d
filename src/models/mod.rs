use serde::{ Serialize, Deserialize };

use crate::weather::WeatherReading;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    /// Serialized prior turns; see `assistant::decode_context` for the format.
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
    pub emotion: String,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub headlines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub weather: WeatherReading,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
