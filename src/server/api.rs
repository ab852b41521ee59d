use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
    extract::State,
    response::IntoResponse,
    http::StatusCode,
    Json,
};
use log::error;
use tower_http::cors::{Any, CorsLayer};

use crate::assistant::Assistant;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse, NewsResponse, WeatherResponse};
use crate::news::NewsClient;
use crate::weather::WeatherClient;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub news: Arc<NewsClient>,
    pub weather: Arc<WeatherClient>,
}

/// Builds the application router. The mirror frontend is served from another
/// origin, so CORS stays wide open.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/news", get(news_handler))
        .route("/weather", get(weather_handler))
        .layer(cors)
        .with_state(state)
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    match state.assistant.respond(&req.prompt, &req.context).await {
        Ok((text, emotion)) => Json(ChatResponse { text, emotion }).into_response(),
        Err(e) => {
            error!("chat completion failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate a reply".to_string(),
                }),
            ).into_response()
        }
    }
}

async fn news_handler(State(state): State<AppState>) -> impl IntoResponse {
    // The aggregator degrades internally; an empty list is a valid response.
    let headlines = state.news.headlines().await;
    Json(NewsResponse { headlines })
}

async fn weather_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.weather.current().await {
        Ok(reading) => Json(WeatherResponse { weather: reading }).into_response(),
        Err(e) => {
            error!("weather fetch failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ).into_response()
        }
    }
}
