// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Core trait for generation backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{ChatRole, Source};

/// Error types for generation calls.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// No credentials or endpoint configured
    #[error("Backend not configured: {0}")]
    NotConfigured(String),

    /// Provider asked us to slow down
    #[error("Rate limited by provider")]
    RateLimited,

    /// Provider returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Transport failure (connect, timeout, TLS)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body or generated content could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Provider answered but produced no text
    #[error("Empty response")]
    EmptyResponse,
}

/// One conversational turn sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: ChatRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A single-shot generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerateRequest {
    /// Persona instruction
    pub system_instruction: Option<String>,
    /// Conversation, oldest first; the last turn is the prompt
    pub turns: Vec<Turn>,
    pub temperature: Option<f32>,
    /// Enable the provider's search-grounding tool
    pub grounded: bool,
    /// Constrain output to JSON matching this schema
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Create a request whose only turn is a user prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::user(text)],
            ..Default::default()
        }
    }

    /// Create a request continuing a conversation with a new user message.
    pub fn conversation(history: Vec<Turn>, message: impl Into<String>) -> Self {
        let mut turns = history;
        turns.push(Turn::user(message));
        Self {
            turns,
            ..Default::default()
        }
    }

    pub fn with_system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature.map(|t| t.clamp(0.0, 2.0));
        self
    }

    pub fn with_grounding(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    pub fn with_response_schema(mut self, schema: Option<serde_json::Value>) -> Self {
        self.response_schema = schema;
        self
    }
}

/// Generated text plus any grounding citations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    pub text: String,
    pub sources: Vec<Source>,
}

impl Generation {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}

/// A generation provider.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Backend identifier (model name).
    fn id(&self) -> &str;

    /// Run one generation request.
    async fn generate(&self, request: GenerateRequest) -> Result<Generation, LlmError>;
}

/// Deduplicate citations by uri.
///
/// The first occurrence of a uri fixes its position; a later duplicate
/// replaces the title.
pub fn dedupe_sources(sources: impl IntoIterator<Item = Source>) -> Vec<Source> {
    let mut unique: Vec<Source> = Vec::new();
    for source in sources {
        match unique.iter_mut().find(|s| s.uri == source.uri) {
            Some(existing) => existing.title = source.title,
            None => unique.push(source),
        }
    }
    unique
}
