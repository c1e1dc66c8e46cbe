// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pack channel history: welcome seed, turn conversion and id-keyed merge.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::models::{ChatMessage, ChatRole};
use crate::services::ai::Turn;

/// Id of the synthetic welcome message.
pub const WELCOME_ID: &str = "init";

const WELCOME_TEXT: &str = "Welcome to the Pack. I'm the Head Trainer here. Life getting in the way of the training? Let's figure it out. What's going on?";

/// Reconciliation state of a send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatSync {
    /// Model reply appended after the user message
    Reconciled,
    /// User message kept; no reply appended
    ReplyFailed { notice: String },
}

/// Authoritative history after a send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOutcome {
    pub messages: Vec<ChatMessage>,
    #[serde(flatten)]
    pub sync: ChatSync,
}

/// The seed shown on an empty channel.
pub fn welcome_message(now: DateTime<Utc>) -> ChatMessage {
    ChatMessage::model(
        WELCOME_ID.to_string(),
        WELCOME_TEXT,
        now.timestamp_millis(),
        Vec::new(),
    )
}

/// Convert stored history to provider turns, oldest first.
pub fn to_turns(history: &[ChatMessage]) -> Vec<Turn> {
    history
        .iter()
        .map(|m| match m.role {
            ChatRole::User => Turn::user(m.text.clone()),
            ChatRole::Model => Turn::model(m.text.clone()),
        })
        .collect()
}

/// Merge a locally built history into the stored one by message id.
///
/// Stored order wins; local messages not yet stored are appended in their
/// local order. No id appears twice in the result.
pub fn merge_by_id(stored: Vec<ChatMessage>, local: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut seen: HashSet<String> = HashSet::with_capacity(stored.len() + local.len());
    let mut merged = Vec::with_capacity(stored.len() + local.len());

    for message in stored.into_iter().chain(local) {
        if seen.insert(message.id.clone()) {
            merged.push(message);
        }
    }

    merged
}
