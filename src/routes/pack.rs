// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pack channel routes.

use crate::error::Result;
use crate::middleware::ProfileScope;
use crate::models::ChatMessage;
use crate::routes::ApiJson;
use crate::services::ChatOutcome;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/pack/history", get(get_history))
        .route("/api/pack/messages", post(send_message))
}

/// Full history; an empty channel is seeded with the welcome message.
async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
) -> Result<Json<Vec<ChatMessage>>> {
    Ok(Json(state.coach.chat_history(&scope.profile_id).await?))
}

#[derive(Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SendMessageRequest {
    pub text: String,
}

async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
    ApiJson(request): ApiJson<SendMessageRequest>,
) -> Result<Json<ChatOutcome>> {
    let outcome = state
        .coach
        .send_message(&scope.profile_id, &request.text)
        .await?;

    Ok(Json(outcome))
}
