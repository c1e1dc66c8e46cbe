// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process slot storage.

use crate::db::KeyValueStore;
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Slot storage backed by a concurrent map. Contents do not survive restart.
#[derive(Default)]
pub struct MemoryStore {
    slots: DashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored slots across all profiles.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, profile_id: &str, key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .slots
            .get(&(profile_id.to_string(), key.to_string()))
            .map(|entry| entry.value().clone()))
    }

    async fn set(&self, profile_id: &str, key: &str, value: String) -> Result<(), AppError> {
        self.slots
            .insert((profile_id.to_string(), key.to_string()), value);
        Ok(())
    }
}
