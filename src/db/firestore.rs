// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore-backed slot storage.
//!
//! Each (profile, slot) pair is one document in the `profile_slots`
//! collection. The slot payload is kept as the JSON string produced by
//! [`crate::db::ProfileStore`], so the document schema never has to track
//! the shape of the domain records.

use crate::db::{collections, KeyValueStore};
use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Stored slot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSlot {
    profile_id: String,
    key: String,
    /// JSON-serialized record
    value: String,
    /// Last write (RFC3339)
    updated_at: String,
}

/// Firestore slot storage client.
#[derive(Clone)]
pub struct FirestoreStore {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreStore {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create an offline client. Every operation returns a database error.
    pub fn new_offline() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }
}

/// Document id for a slot. Profile ids are url-encoded so they cannot
/// collide with the separator.
fn slot_document_id(profile_id: &str, key: &str) -> String {
    format!("{}__{}", urlencoding::encode(profile_id), key)
}

#[async_trait]
impl KeyValueStore for FirestoreStore {
    async fn get(&self, profile_id: &str, key: &str) -> Result<Option<String>, AppError> {
        let slot: Option<StoredSlot> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PROFILE_SLOTS)
            .obj()
            .one(&slot_document_id(profile_id, key))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(slot.map(|s| s.value))
    }

    async fn set(&self, profile_id: &str, key: &str, value: String) -> Result<(), AppError> {
        let slot = StoredSlot {
            profile_id: profile_id.to_string(),
            key: key.to_string(),
            value,
            updated_at: crate::time_utils::format_utc_rfc3339(chrono::Utc::now()),
        };

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::PROFILE_SLOTS)
            .document_id(slot_document_id(profile_id, key))
            .object(&slot)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(profile = profile_id, key, "Slot written");
        Ok(())
    }
}
