// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coach service: the single owner of per-profile state.
//!
//! Every user-facing operation goes through here. The workflow for the two
//! history-mutating operations is:
//! 1. Validate input and check the AI gateway is configured
//! 2. Take the profile lock
//! 3. Persist the user's input
//! 4. Call the gateway (fallbacks never abort the operation)
//! 5. Persist and return the authoritative result

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use validator::Validate;

use crate::db::{KeyValueStore, ProfileStore};
use crate::error::{AppError, Result};
use crate::models::{
    ChatMessage, CheckInInput, CheckInSession, DailyRhythm, DogProfile, ManifestoSection,
    UserStats,
};
use crate::services::ai::{CoachGateway, Reply};
use crate::services::chat::{self, ChatOutcome, ChatSync};
use crate::services::community::{self, CommunityFeed};
use crate::services::{check_in, rsvp};
use crate::time_utils::next_record_id;

/// Per-profile locks serializing read-modify-write cycles.
pub type ProfileLocks = Arc<DashMap<String, Arc<Mutex<()>>>>;

/// Result of a check-in submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInResult {
    /// Full history, newest first
    pub history: Vec<CheckInSession>,
    pub stats: UserStats,
}

/// Held profile lock. On release the map entry is dropped once no other
/// task holds or waits on it, so the map only tracks active profiles.
struct ProfileGuard {
    guard: Option<OwnedMutexGuard<()>>,
    locks: ProfileLocks,
    profile_id: String,
}

impl Drop for ProfileGuard {
    fn drop(&mut self) {
        self.guard.take();
        self.locks
            .remove_if(&self.profile_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

#[derive(Clone)]
pub struct CoachService {
    store: Arc<dyn KeyValueStore>,
    gateway: CoachGateway,
    locks: ProfileLocks,
}

impl CoachService {
    pub fn new(store: Arc<dyn KeyValueStore>, gateway: CoachGateway) -> Self {
        Self {
            store,
            gateway,
            locks: Arc::new(DashMap::new()),
        }
    }

    pub fn gateway(&self) -> &CoachGateway {
        &self.gateway
    }

    fn profile(&self, profile_id: &str) -> ProfileStore {
        ProfileStore::new(self.store.clone(), profile_id)
    }

    async fn lock(&self, profile_id: &str) -> ProfileGuard {
        let lock = self
            .locks
            .entry(profile_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        ProfileGuard {
            guard: Some(lock.lock_owned().await),
            locks: self.locks.clone(),
            profile_id: profile_id.to_string(),
        }
    }

    // ─── Profile & Rhythm ────────────────────────────────────────

    pub async fn get_profile(&self, profile_id: &str) -> Result<Option<DogProfile>> {
        self.profile(profile_id).get_profile().await
    }

    /// Overwrite the stored profile.
    pub async fn update_profile(&self, profile_id: &str, profile: DogProfile) -> Result<DogProfile> {
        profile.validate()?;

        let _guard = self.lock(profile_id).await;
        self.profile(profile_id).save_profile(&profile).await?;
        tracing::info!(profile = profile_id, dog = %profile.name, "Profile updated");

        Ok(profile)
    }

    pub async fn get_rhythm(&self, profile_id: &str) -> Result<Option<DailyRhythm>> {
        self.profile(profile_id).get_rhythm().await
    }

    /// Save `profile` and generate a fresh rhythm for it.
    ///
    /// The current rhythm is replaced only when generation succeeds.
    pub async fn generate_rhythm(
        &self,
        profile_id: &str,
        profile: DogProfile,
    ) -> Result<Option<DailyRhythm>> {
        profile.validate()?;
        self.gateway.ensure_configured()?;

        let _guard = self.lock(profile_id).await;
        let store = self.profile(profile_id);
        store.save_profile(&profile).await?;

        let rhythm = self.gateway.generate_plan(&profile).await?;
        match &rhythm {
            Some(rhythm) => {
                store.save_rhythm(rhythm).await?;
                tracing::info!(
                    profile = profile_id,
                    theme = %rhythm.theme,
                    sources = rhythm.sources.len(),
                    "Rhythm generated"
                );
            }
            None => {
                tracing::warn!(profile = profile_id, "Rhythm generation failed, keeping previous plan");
            }
        }

        Ok(rhythm)
    }

    // ─── Pack channel ────────────────────────────────────────────

    /// Chat history, seeding the welcome message on an empty channel.
    pub async fn chat_history(&self, profile_id: &str) -> Result<Vec<ChatMessage>> {
        let store = self.profile(profile_id);
        let history = store.get_chat_history().await?;
        if !history.is_empty() {
            return Ok(history);
        }

        let _guard = self.lock(profile_id).await;
        // Another request may have seeded while we waited
        let history = store.get_chat_history().await?;
        if !history.is_empty() {
            return Ok(history);
        }

        let seeded = vec![chat::welcome_message(Utc::now())];
        store.save_chat_history(&seeded).await?;
        tracing::debug!(profile = profile_id, "Seeded pack channel");

        Ok(seeded)
    }

    /// Send a message to the pack channel.
    ///
    /// The user's message is persisted before the gateway is called. If no
    /// reply is produced the message stays in history and the outcome is
    /// `ReplyFailed`.
    pub async fn send_message(&self, profile_id: &str, text: &str) -> Result<ChatOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest("Message text is required".to_string()));
        }
        self.gateway.ensure_configured()?;

        let _guard = self.lock(profile_id).await;
        let store = self.profile(profile_id);

        let prior = store.get_chat_history().await?;
        let now = Utc::now();
        let user_message = ChatMessage::user(next_record_id(now), text, now.timestamp_millis());

        let mut local = prior.clone();
        local.push(user_message);
        store.save_chat_history(&local).await?;

        let reply = self.gateway.chat(text, chat::to_turns(&prior)).await?;

        let sync = match reply {
            Reply::Generated(reply) => {
                let now = Utc::now();
                local.push(ChatMessage::model(
                    next_record_id(now),
                    reply.text,
                    now.timestamp_millis(),
                    reply.sources,
                ));
                ChatSync::Reconciled
            }
            Reply::Fallback(reply) => {
                tracing::warn!(profile = profile_id, "Pack reply failed, user message kept");
                ChatSync::ReplyFailed { notice: reply.text }
            }
        };

        let stored = store.get_chat_history().await?;
        let messages = chat::merge_by_id(stored, local);
        store.save_chat_history(&messages).await?;

        Ok(ChatOutcome { messages, sync })
    }

    // ─── Performance ─────────────────────────────────────────────

    /// Current stats with rank fields recomputed from total miles.
    pub async fn stats(&self, profile_id: &str) -> Result<UserStats> {
        Ok(self.profile(profile_id).get_stats().await?.with_fresh_rank())
    }

    /// Check-in history, newest first.
    pub async fn check_in_history(&self, profile_id: &str) -> Result<Vec<CheckInSession>> {
        self.profile(profile_id).get_check_ins().await
    }

    pub async fn submit_check_in(
        &self,
        profile_id: &str,
        input: CheckInInput,
    ) -> Result<CheckInResult> {
        self.submit_check_in_at(profile_id, input, Utc::now()).await
    }

    /// Submit a check-in as of `now`.
    ///
    /// Stats are persisted before the coach is asked for feedback; a coach
    /// fallback is recorded as no feedback and does not abort the check-in.
    pub async fn submit_check_in_at(
        &self,
        profile_id: &str,
        input: CheckInInput,
        now: DateTime<Utc>,
    ) -> Result<CheckInResult> {
        input.validate()?;
        self.gateway.ensure_configured()?;

        let _guard = self.lock(profile_id).await;
        let store = self.profile(profile_id);

        let current = store.get_stats().await?;
        let stats = check_in::accumulate(&current, &input, now);
        if !stats.total_miles.is_finite() {
            return Err(AppError::BadRequest(
                "check-in would overflow total miles".to_string(),
            ));
        }
        store.save_stats(&stats).await?;

        tracing::info!(
            profile = profile_id,
            total_miles = stats.total_miles,
            streak_days = stats.streak_days,
            rank = %stats.rank.rank,
            "Check-in recorded"
        );

        let snapshot = check_in::snapshot(&input, &stats);
        let feedback = self
            .gateway
            .critique(&input.notes, &snapshot)
            .await?
            .generated();

        let session = check_in::build_session(&input, snapshot, feedback, now);
        let history = store.save_check_in(session).await?;

        Ok(CheckInResult { history, stats })
    }

    // ─── Community ───────────────────────────────────────────────

    pub async fn community_feed(&self, profile_id: &str) -> Result<CommunityFeed> {
        let joined = self.profile(profile_id).get_rsvps().await?;
        Ok(community::feed(&joined))
    }

    pub async fn rsvps(&self, profile_id: &str) -> Result<Vec<String>> {
        self.profile(profile_id).get_rsvps().await
    }

    /// Toggle membership of `event_id` and return the updated set.
    pub async fn toggle_rsvp(&self, profile_id: &str, event_id: &str) -> Result<Vec<String>> {
        let _guard = self.lock(profile_id).await;
        let store = self.profile(profile_id);

        let joined = rsvp::toggle(store.get_rsvps().await?, event_id);
        store.save_rsvps(&joined).await?;

        Ok(joined)
    }

    pub fn manifesto(&self) -> Vec<ManifestoSection> {
        community::manifesto()
    }
}
