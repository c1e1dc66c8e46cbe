// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gemini API client.
//!
//! Handles:
//! - `generateContent` requests with persona, history and optional search grounding
//! - JSON-schema constrained output
//! - Grounding citation extraction
//! - Rate limit detection (so the gateway can fall back)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::backend::{dedupe_sources, GenerateRequest, Generation, GenerativeBackend, LlmError};
use crate::models::Source;

/// Gemini REST backend for a single model.
#[derive(Clone)]
pub struct GeminiBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Create a client for `model` against `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::NotConfigured(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, LlmError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!(model = %self.model, "Gemini rate limit hit (429)");
                return Err(LlmError::RateLimited);
            }

            return Err(LlmError::RequestFailed(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(format!("JSON parse error: {}", e)))
    }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

impl GenerateContentRequest {
    fn from_request(request: GenerateRequest) -> Self {
        let contents = request
            .turns
            .into_iter()
            .map(|turn| Content {
                role: Some(turn.role.as_str().to_string()),
                parts: vec![Part {
                    text: Some(turn.text),
                }],
            })
            .collect();

        let system_instruction = request.system_instruction.map(|text| Content {
            role: None,
            parts: vec![Part { text: Some(text) }],
        });

        let tools = if request.grounded {
            vec![Tool {
                google_search: serde_json::json!({}),
            }]
        } else {
            Vec::new()
        };

        let structured = request.response_schema.is_some();
        let generation_config = if request.temperature.is_some() || structured {
            Some(GenerationConfig {
                temperature: request.temperature,
                response_mime_type: structured.then(|| "application/json".to_string()),
                response_schema: request.response_schema,
            })
        } else {
            None
        };

        Self {
            contents,
            system_instruction,
            tools,
            generation_config,
        }
    }
}

impl GenerateContentResponse {
    fn into_generation(self) -> Result<Generation, LlmError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|m| {
                dedupe_sources(m.grounding_chunks.into_iter().filter_map(|chunk| {
                    let web = chunk.web?;
                    Some(Source {
                        title: web.title.unwrap_or_else(|| "Source".to_string()),
                        uri: web.uri?,
                    })
                }))
            })
            .unwrap_or_default();

        Ok(Generation { text, sources })
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    fn id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: GenerateRequest) -> Result<Generation, LlmError> {
        let body = GenerateContentRequest::from_request(request);

        let response = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let parsed: GenerateContentResponse = self.check_response_json(response).await?;
        parsed.into_generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ai::backend::Turn;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest::conversation(vec![Turn::model("Welcome")], "Hi")
            .with_system("Be terse")
            .with_temperature(Some(0.7))
            .with_grounding(true);

        let body = serde_json::to_value(GenerateContentRequest::from_request(request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "model");
        assert_eq!(body["contents"][1]["parts"][0]["text"], "Hi");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be terse");
        assert!(body["tools"][0]["googleSearch"].is_object());
        assert!(body["generationConfig"]["responseMimeType"].is_null());
    }

    #[test]
    fn test_structured_request_sets_mime_type() {
        let request = GenerateRequest::prompt("plan")
            .with_response_schema(Some(serde_json::json!({"type": "OBJECT"})));

        let body = serde_json::to_value(GenerateContentRequest::from_request(request)).unwrap();

        assert!(body.get("tools").is_none());
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_response_text_and_sources() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Tighten "}, {"text": "it up."}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://a.example", "title": "A"}},
                    {"web": {"uri": "https://b.example"}},
                    {"retrievedContext": {}}
                ]}
            }]
        }))
        .unwrap();

        let generation = response.into_generation().unwrap();
        assert_eq!(generation.text, "Tighten it up.");
        assert_eq!(generation.sources.len(), 2);
        assert_eq!(generation.sources[1].title, "Source");
    }

    #[test]
    fn test_no_candidates_is_empty_response() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}}))
                .unwrap();

        assert!(matches!(
            response.into_generation(),
            Err(LlmError::EmptyResponse)
        ));
    }
}
