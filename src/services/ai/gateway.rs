// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coach gateway: the only entry point from domain code to generation.
//!
//! Every call walks an ordered list of strategies until one produces a
//! usable value. Provider failures never escape: plan generation resolves
//! to `None` and text calls resolve to a fixed fallback line. The only
//! error surfaced to callers is a missing configuration.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use super::backend::{GenerateRequest, Generation, GenerativeBackend, LlmError, Turn};
use super::gemini::GeminiBackend;
use super::prompts;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{DailyRhythm, DogProfile, Source, StatEntry};

const CHAT_EMPTY_REPLY: &str = "Silence... try again.";
const CHAT_FAILED_REPLY: &str = "The radio silence is deafening. Check your connection.";
const CRITIQUE_EMPTY_REPLY: &str = "Check-in received. Keep moving.";
const CRITIQUE_FAILED_REPLY: &str = "Unable to process check-in. Server comms down.";

/// Temperature for the primary plan strategy.
const PLAN_TEMPERATURE: f32 = 0.7;

/// One way of asking for a generation.
#[derive(Clone)]
pub struct GenerationStrategy {
    pub backend: Arc<dyn GenerativeBackend>,
    /// Attach the search-grounding tool where the call supports it
    pub grounded: bool,
    /// Ask for schema-constrained JSON on structured calls
    pub structured: bool,
    /// Sampling temperature for plan calls; provider default if unset
    pub temperature: Option<f32>,
}

impl GenerationStrategy {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            grounded: false,
            structured: false,
            temperature: None,
        }
    }

    pub fn grounded(mut self) -> Self {
        self.grounded = true;
        self
    }

    pub fn structured(mut self) -> Self {
        self.structured = true;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Outcome of a text call: real output, or the fallback line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Generated(T),
    Fallback(T),
}

impl<T> Reply<T> {
    pub fn is_generated(&self) -> bool {
        matches!(self, Reply::Generated(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Reply::Generated(value) | Reply::Fallback(value) => value,
        }
    }

    pub fn generated(self) -> Option<T> {
        match self {
            Reply::Generated(value) => Some(value),
            Reply::Fallback(_) => None,
        }
    }
}

/// Chat continuation text with citations.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub text: String,
    pub sources: Vec<Source>,
}

impl ChatReply {
    fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sources: Vec::new(),
        }
    }
}

/// Errors surfaced past the gateway boundary.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("No generation backend configured: {0}")]
    NotConfigured(String),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotConfigured(msg) => AppError::AiNotConfigured(msg),
        }
    }
}

/// Plan, chat and critique calls over an ordered strategy list.
#[derive(Clone)]
pub struct CoachGateway {
    strategies: Vec<GenerationStrategy>,
}

impl CoachGateway {
    pub fn new(strategies: Vec<GenerationStrategy>) -> Self {
        Self { strategies }
    }

    /// Gateway with no strategies; every call reports `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self::new(Vec::new())
    }

    /// Build the default Gemini chain from configuration.
    ///
    /// Primary model with search grounding first, then the fallback model
    /// with schema-constrained output and no grounding.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let Some(api_key) = config.gemini_api_key.as_deref() else {
            tracing::warn!("GEMINI_API_KEY not set, AI coach disabled");
            return Ok(Self::unconfigured());
        };

        let timeout = Duration::from_secs(config.ai_timeout_secs);
        let primary = GeminiBackend::new(
            &config.gemini_base_url,
            &config.primary_model,
            api_key,
            timeout,
        )?;
        let fallback = GeminiBackend::new(
            &config.gemini_base_url,
            &config.fallback_model,
            api_key,
            timeout,
        )?;

        Ok(Self::new(vec![
            GenerationStrategy::new(Arc::new(primary))
                .grounded()
                .with_temperature(PLAN_TEMPERATURE),
            GenerationStrategy::new(Arc::new(fallback)).structured(),
        ]))
    }

    pub fn is_configured(&self) -> bool {
        !self.strategies.is_empty()
    }

    /// Fail fast when no backend is configured.
    pub fn ensure_configured(&self) -> Result<(), GatewayError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(GatewayError::NotConfigured(
                "set GEMINI_API_KEY to enable the coach".to_string(),
            ))
        }
    }

    /// Generate a daily rhythm for `profile`.
    ///
    /// Returns `Ok(None)` when every strategy failed or produced output that
    /// does not parse as a rhythm.
    pub async fn generate_plan(
        &self,
        profile: &DogProfile,
    ) -> Result<Option<DailyRhythm>, GatewayError> {
        let mission_id = Utc::now().timestamp_subsec_nanos() % 10_000;

        let outcome = self
            .run(
                "plan",
                |strategy| {
                    let schema = strategy.structured.then(prompts::rhythm_schema);
                    GenerateRequest::prompt(prompts::rhythm_prompt(
                        profile,
                        mission_id,
                        strategy.grounded,
                    ))
                    .with_system(prompts::TRAINER_PERSONA)
                    .with_temperature(strategy.temperature)
                    .with_grounding(strategy.grounded)
                    .with_response_schema(schema)
                },
                |generation| {
                    let mut rhythm = parse_rhythm(&generation.text)?;
                    rhythm.sources = generation.sources;
                    Ok(rhythm)
                },
            )
            .await?;

        Ok(outcome.ok())
    }

    /// Continue the pack conversation.
    pub async fn chat(
        &self,
        message: &str,
        history: Vec<Turn>,
    ) -> Result<Reply<ChatReply>, GatewayError> {
        let outcome = self
            .run(
                "chat",
                |strategy| {
                    GenerateRequest::conversation(history.clone(), message)
                        .with_system(prompts::PACK_PERSONA)
                        .with_grounding(strategy.grounded)
                },
                non_empty,
            )
            .await?;

        Ok(match outcome {
            Ok(generation) => Reply::Generated(ChatReply {
                text: generation.text,
                sources: generation.sources,
            }),
            Err(LlmError::EmptyResponse) => Reply::Fallback(ChatReply::fallback(CHAT_EMPTY_REPLY)),
            Err(_) => Reply::Fallback(ChatReply::fallback(CHAT_FAILED_REPLY)),
        })
    }

    /// Short coaching feedback on a check-in.
    pub async fn critique(
        &self,
        notes: &str,
        snapshot: &[StatEntry],
    ) -> Result<Reply<String>, GatewayError> {
        let prompt = prompts::check_in_prompt(notes, snapshot);

        let outcome = self
            .run(
                "critique",
                |_| GenerateRequest::prompt(prompt.clone()).with_system(prompts::COACH_PERSONA),
                non_empty,
            )
            .await?;

        Ok(match outcome {
            Ok(generation) => Reply::Generated(generation.text),
            Err(LlmError::EmptyResponse) => Reply::Fallback(CRITIQUE_EMPTY_REPLY.to_string()),
            Err(_) => Reply::Fallback(CRITIQUE_FAILED_REPLY.to_string()),
        })
    }

    /// Try each strategy in order until `accept` yields a value.
    ///
    /// The inner result carries the last failure when every strategy failed.
    async fn run<T>(
        &self,
        purpose: &'static str,
        build: impl Fn(&GenerationStrategy) -> GenerateRequest,
        accept: impl Fn(Generation) -> Result<T, LlmError>,
    ) -> Result<Result<T, LlmError>, GatewayError> {
        self.ensure_configured()?;

        let mut last_error = LlmError::EmptyResponse;
        for (attempt, strategy) in self.strategies.iter().enumerate() {
            let model = strategy.backend.id();
            let result = strategy
                .backend
                .generate(build(strategy))
                .await
                .and_then(&accept);

            match result {
                Ok(value) => {
                    tracing::debug!(purpose, model, attempt, "Generation succeeded");
                    return Ok(Ok(value));
                }
                Err(e) => {
                    tracing::warn!(purpose, model, attempt, error = %e, "Generation attempt failed");
                    last_error = e;
                }
            }
        }

        Ok(Err(last_error))
    }
}

fn non_empty(generation: Generation) -> Result<Generation, LlmError> {
    if generation.text.trim().is_empty() {
        Err(LlmError::EmptyResponse)
    } else {
        Ok(generation)
    }
}

/// Parse a rhythm from model output that may be wrapped in markdown fences
/// or surrounded by stray prose.
pub fn parse_rhythm(text: &str) -> Result<DailyRhythm, LlmError> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    match serde_json::from_str(cleaned) {
        Ok(rhythm) => Ok(rhythm),
        Err(first_error) => {
            let object = cleaned
                .find('{')
                .zip(cleaned.rfind('}'))
                .filter(|(start, end)| start < end)
                .map(|(start, end)| &cleaned[start..=end]);

            match object {
                Some(candidate) => serde_json::from_str(candidate)
                    .map_err(|e| LlmError::ParseError(format!("Invalid rhythm JSON: {}", e))),
                None => Err(LlmError::ParseError(format!(
                    "Invalid rhythm JSON: {}",
                    first_error
                ))),
            }
        }
    }
}
