use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE}};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ChatMessage, CompletionClient, CompletionError};

/// Client for an OpenAI-compatible chat completion endpoint.
pub struct OpenAiClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: &str,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| format!("Invalid API key format: {}", e))?,
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            model,
            base_url,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));

        let req = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        let resp = self.http.post(&url)
            .json(&req)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletionResponse>()
            .await?;

        let content = resp.choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?
            .message.content;

        debug!("completion returned {} bytes", content.len());
        Ok(content)
    }
}
