// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Performance routes: stats, check-in history and submission.

use crate::error::Result;
use crate::middleware::ProfileScope;
use crate::models::{CheckInInput, CheckInSession, UserStats};
use crate::routes::ApiJson;
use crate::services::CheckInResult;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/performance/stats", get(get_stats))
        .route("/api/performance/history", get(get_history))
        .route("/api/performance/check-ins", post(submit_check_in))
}

/// Stats with rank fields recomputed from total miles.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
) -> Result<Json<UserStats>> {
    Ok(Json(state.coach.stats(&scope.profile_id).await?))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
) -> Result<Json<Vec<CheckInSession>>> {
    Ok(Json(state.coach.check_in_history(&scope.profile_id).await?))
}

async fn submit_check_in(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
    ApiJson(input): ApiJson<CheckInInput>,
) -> Result<Json<CheckInResult>> {
    tracing::debug!(
        profile = %scope.profile_id,
        miles = input.miles,
        sessions = input.sessions,
        "Check-in submitted"
    );

    let result = state
        .coach
        .submit_check_in(&scope.profile_id, input)
        .await?;

    Ok(Json(result))
}
