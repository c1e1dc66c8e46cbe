// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI gateway: generation backends, prompts and the fallback chain.
//!
//! - `backend`: the `GenerativeBackend` trait and request/response types
//! - `gemini`: Gemini `generateContent` REST client
//! - `scripted`: deterministic backend for tests
//! - `gateway`: plan/chat/critique calls over an ordered strategy list

pub mod backend;
pub mod gateway;
pub mod gemini;
pub mod prompts;
pub mod scripted;

pub use backend::{GenerateRequest, Generation, GenerativeBackend, LlmError, Turn};
pub use gateway::{ChatReply, CoachGateway, GatewayError, GenerationStrategy, Reply};
pub use gemini::GeminiBackend;
pub use scripted::ScriptedBackend;
