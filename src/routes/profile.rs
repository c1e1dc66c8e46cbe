// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dog profile and daily rhythm routes.

use crate::error::Result;
use crate::middleware::ProfileScope;
use crate::models::{DailyRhythm, DogProfile};
use crate::routes::ApiJson;
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile).put(update_profile))
        .route("/api/rhythm", get(get_rhythm).post(generate_rhythm))
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
) -> Result<Json<Option<DogProfile>>> {
    Ok(Json(state.coach.get_profile(&scope.profile_id).await?))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
    ApiJson(profile): ApiJson<DogProfile>,
) -> Result<Json<DogProfile>> {
    Ok(Json(
        state.coach.update_profile(&scope.profile_id, profile).await?,
    ))
}

async fn get_rhythm(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
) -> Result<Json<Option<DailyRhythm>>> {
    Ok(Json(state.coach.get_rhythm(&scope.profile_id).await?))
}

/// Rhythm generation response. `rhythm` is null when generation failed.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GenerateRhythmResponse {
    pub rhythm: Option<DailyRhythm>,
}

/// Save the submitted profile and generate a rhythm for it.
async fn generate_rhythm(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
    ApiJson(profile): ApiJson<DogProfile>,
) -> Result<Json<GenerateRhythmResponse>> {
    let rhythm = state
        .coach
        .generate_rhythm(&scope.profile_id, profile)
        .await?;

    Ok(Json(GenerateRhythmResponse { rhythm }))
}
