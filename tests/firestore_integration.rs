// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running
//! (FIRESTORE_EMULATOR_HOST). They are skipped otherwise.

use std::sync::Arc;
use wildcord::db::{KeyValueStore, ProfileStore};
use wildcord::models::UserStats;

mod common;
use common::test_store;

/// Generate a unique profile id for test isolation.
fn unique_profile_id() -> String {
    format!("it-{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
async fn test_slot_round_trip_and_overwrite() {
    require_emulator!();

    let store = test_store().await;
    let profile = unique_profile_id();

    assert_eq!(store.get(&profile, "wildcord_stats").await.unwrap(), None);

    store
        .set(&profile, "wildcord_stats", "{\"total_miles\":1}".to_string())
        .await
        .unwrap();
    store
        .set(&profile, "wildcord_stats", "{\"total_miles\":2}".to_string())
        .await
        .unwrap();

    assert_eq!(
        store.get(&profile, "wildcord_stats").await.unwrap().as_deref(),
        Some("{\"total_miles\":2}")
    );
}

#[tokio::test]
async fn test_profile_store_over_firestore() {
    require_emulator!();

    let store = Arc::new(test_store().await);
    let profile_id = unique_profile_id();
    let profile = ProfileStore::new(store.clone(), profile_id.clone());

    let stats = UserStats {
        total_miles: 60.0,
        total_sessions: 12,
        streak_days: 3,
        last_check_in_date: 1_700_000_000_000,
        ..UserStats::default()
    }
    .with_fresh_rank();
    profile.save_stats(&stats).await.unwrap();

    assert_eq!(profile.get_stats().await.unwrap(), stats);

    // Another profile sees defaults
    let other = ProfileStore::new(store, unique_profile_id());
    assert_eq!(other.get_stats().await.unwrap(), UserStats::default());
}

#[tokio::test]
async fn test_corrupt_slot_reads_as_default() {
    require_emulator!();

    let store = Arc::new(test_store().await);
    let profile_id = unique_profile_id();

    store
        .set(&profile_id, "wildcord_rsvps", "not json".to_string())
        .await
        .unwrap();

    let profile = ProfileStore::new(store, profile_id);
    assert!(profile.get_rsvps().await.unwrap().is_empty());
}
