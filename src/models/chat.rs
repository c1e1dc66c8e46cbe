// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pack channel chat messages.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Source;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// A single chat message. Never edited once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChatMessage {
    /// Time-derived unique id
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Creation instant (Unix milliseconds)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl ChatMessage {
    pub fn user(id: String, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            role: ChatRole::User,
            text: text.into(),
            timestamp,
            sources: Vec::new(),
        }
    }

    pub fn model(id: String, text: impl Into<String>, timestamp: i64, sources: Vec<Source>) -> Self {
        Self {
            id,
            role: ChatRole::Model,
            text: text.into(),
            timestamp,
            sources,
        }
    }
}
