//! Gemini API client struct, request building, and response parsing.

use tracing::debug;

use crate::{mentions_credential, GenerateRequest, Generation, Part, ProviderError, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.config.base_url, model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(request: &GenerateRequest<'_>) -> serde_json::Value {
        let contents: Vec<_> = request
            .turns
            .iter()
            .map(|turn| {
                let parts: Vec<_> = turn.parts().iter().map(part_to_json).collect();
                serde_json::json!({
                    "role": turn.speaker().wire_role(),
                    "parts": parts,
                })
            })
            .collect();

        let mut generation_config = serde_json::json!({
            "temperature": request.temperature,
        });
        if let Some(max) = request.max_output_tokens {
            generation_config["maxOutputTokens"] = serde_json::json!(max);
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": generation_config,
        });

        if !request.instructions.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": request.instructions }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    ///
    /// A response without candidates (e.g. a blocked prompt) is a valid
    /// generation with no text, not an error.
    pub(crate) fn parse_response(json: serde_json::Value) -> Result<Generation, ProviderError> {
        if !json.is_object() {
            return Err(ProviderError::Parse("response is not a JSON object".to_string()));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        let Some(first) = json["candidates"].as_array().and_then(|c| c.first()) else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                debug!(reason, "Gemini returned no candidates");
            }
            return Ok(Generation { text: None, usage });
        };

        let mut text = String::new();
        if let Some(parts) = first["content"]["parts"].as_array() {
            for part in parts {
                if part["thought"].as_bool() == Some(true) {
                    continue;
                }
                if let Some(t) = part["text"].as_str() {
                    text.push_str(t);
                }
            }
        }

        Ok(Generation {
            text: (!text.is_empty()).then_some(text),
            usage,
        })
    }

    /// Map a non-success HTTP status and its body to a provider error.
    pub(crate) fn classify_failure(status: reqwest::StatusCode, body: &str) -> ProviderError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return ProviderError::RateLimited;
        }

        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(String::from))
            .unwrap_or_else(|| body.trim().to_string());

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
            || mentions_credential(body)
        {
            return ProviderError::Credential(format!("HTTP {status}: {message}"));
        }

        ProviderError::Api(format!("HTTP {status}: {message}"))
    }
}

fn part_to_json(part: &Part) -> serde_json::Value {
    match part {
        Part::Text(text) => serde_json::json!({ "text": text }),
        Part::Attachment(attachment) => serde_json::json!({
            "inlineData": {
                "mimeType": attachment.mime_type,
                "data": attachment.data,
            }
        }),
    }
}
