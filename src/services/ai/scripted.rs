// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scripted generation backend for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::backend::{GenerateRequest, Generation, GenerativeBackend, LlmError};
use crate::models::Source;

/// Backend that replays queued outcomes and records every request.
///
/// Once the queue is drained it answers with the default reply, or fails
/// with `RequestFailed` if none was set.
pub struct ScriptedBackend {
    model_id: String,
    script: Mutex<VecDeque<Result<Generation, LlmError>>>,
    default_reply: Option<String>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedBackend {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            script: Mutex::new(VecDeque::new()),
            default_reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every unscripted call with `text`.
    pub fn with_default_reply(mut self, text: impl Into<String>) -> Self {
        self.default_reply = Some(text.into());
        self
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, text: impl Into<String>) -> &Self {
        self.push(Ok(Generation::text(text)))
    }

    /// Queue a successful reply carrying citations.
    pub fn push_reply_with_sources(&self, text: impl Into<String>, sources: Vec<Source>) -> &Self {
        self.push(Ok(Generation {
            text: text.into(),
            sources,
        }))
    }

    /// Queue a failure.
    pub fn push_failure(&self, error: LlmError) -> &Self {
        self.push(Err(error))
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    fn push(&self, outcome: Result<Generation, LlmError>) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
        self
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    fn id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, request: GenerateRequest) -> Result<Generation, LlmError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        match next {
            Some(outcome) => outcome,
            None => match &self.default_reply {
                Some(text) => Ok(Generation::text(text.clone())),
                None => Err(LlmError::RequestFailed("script exhausted".to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_script_then_default() {
        let backend = ScriptedBackend::new("scripted").with_default_reply("default");
        backend.push_reply("first");
        backend.push_failure(LlmError::RateLimited);

        let first = backend.generate(GenerateRequest::prompt("a")).await.unwrap();
        assert_eq!(first.text, "first");

        let second = backend.generate(GenerateRequest::prompt("b")).await;
        assert!(matches!(second, Err(LlmError::RateLimited)));

        let third = backend.generate(GenerateRequest::prompt("c")).await.unwrap();
        assert_eq!(third.text, "default");

        assert_eq!(backend.call_count(), 3);
        assert_eq!(backend.requests()[1].turns[0].text, "b");
    }

    #[tokio::test]
    async fn test_exhausted_without_default_fails() {
        let backend = ScriptedBackend::new("scripted");
        let result = backend.generate(GenerateRequest::prompt("a")).await;
        assert!(matches!(result, Err(LlmError::RequestFailed(_))));
    }
}
