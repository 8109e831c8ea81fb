//! ModelClient trait implementation for GeminiClient.

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use tracing::debug;

use crate::{GenerateRequest, Generation, ModelClient, ProviderError};

use super::client::GeminiClient;

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<Generation, ProviderError> {
        // Resolved per call: a rotated key takes effect on the next request.
        let key = self.config.api_key.resolve()?;
        let key = HeaderValue::from_str(&key).map_err(|_| {
            ProviderError::Credential("API key contains invalid header characters".into())
        })?;

        let body = Self::build_request_body(request);
        let url = self.api_url(request.model);

        debug!(model = %request.model, turns = request.turns.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status, &text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Self::parse_response(json)
    }
}
