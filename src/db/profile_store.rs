// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed access to one profile's slots.
//!
//! Each record is serialized to JSON in its own slot. Reading an absent or
//! unparseable slot yields the record's documented default; only backend
//! failures are reported as errors.

use crate::db::{slots, KeyValueStore};
use crate::error::AppError;
use crate::models::{ChatMessage, CheckInSession, DailyRhythm, DogProfile, UserStats};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Slot adapter bound to a single profile.
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
    profile_id: String,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>, profile_id: impl Into<String>) -> Self {
        Self {
            store,
            profile_id: profile_id.into(),
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    // ─── Profile ─────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Result<Option<DogProfile>, AppError> {
        self.read_slot(slots::PROFILE).await
    }

    pub async fn save_profile(&self, profile: &DogProfile) -> Result<(), AppError> {
        self.write_slot(slots::PROFILE, profile).await
    }

    // ─── Rhythm ──────────────────────────────────────────────────

    pub async fn get_rhythm(&self) -> Result<Option<DailyRhythm>, AppError> {
        self.read_slot(slots::RHYTHM).await
    }

    pub async fn save_rhythm(&self, rhythm: &DailyRhythm) -> Result<(), AppError> {
        self.write_slot(slots::RHYTHM, rhythm).await
    }

    // ─── Chat ────────────────────────────────────────────────────

    pub async fn get_chat_history(&self) -> Result<Vec<ChatMessage>, AppError> {
        Ok(self.read_slot(slots::CHAT).await?.unwrap_or_default())
    }

    pub async fn save_chat_history(&self, history: &[ChatMessage]) -> Result<(), AppError> {
        self.write_slot(slots::CHAT, &history).await
    }

    // ─── Check-ins ───────────────────────────────────────────────

    /// Check-in history, newest first.
    pub async fn get_check_ins(&self) -> Result<Vec<CheckInSession>, AppError> {
        Ok(self.read_slot(slots::CHECK_INS).await?.unwrap_or_default())
    }

    /// Prepend a session to the history and return the updated history.
    pub async fn save_check_in(
        &self,
        session: CheckInSession,
    ) -> Result<Vec<CheckInSession>, AppError> {
        let mut history = self.get_check_ins().await?;
        history.insert(0, session);
        self.write_slot(slots::CHECK_INS, &history).await?;
        Ok(history)
    }

    // ─── Stats ───────────────────────────────────────────────────

    /// Stored stats as written. Rank fields may be stale.
    pub async fn get_stats(&self) -> Result<UserStats, AppError> {
        Ok(self.read_slot(slots::STATS).await?.unwrap_or_default())
    }

    pub async fn save_stats(&self, stats: &UserStats) -> Result<(), AppError> {
        self.write_slot(slots::STATS, stats).await
    }

    // ─── RSVPs ───────────────────────────────────────────────────

    pub async fn get_rsvps(&self) -> Result<Vec<String>, AppError> {
        Ok(self.read_slot(slots::RSVPS).await?.unwrap_or_default())
    }

    pub async fn save_rsvps(&self, event_ids: &[String]) -> Result<(), AppError> {
        self.write_slot(slots::RSVPS, &event_ids).await
    }

    // ─── Helper Methods ──────────────────────────────────────────

    async fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let Some(raw) = self.store.get(&self.profile_id, key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(
                    profile = %self.profile_id,
                    key,
                    error = %e,
                    "Corrupt slot, falling back to default"
                );
                Ok(None)
            }
        }
    }

    async fn write_slot<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize {}: {}", key, e)))?;
        self.store.set(&self.profile_id, key, raw).await
    }
}
