// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed, RSVP and manifesto routes.

use crate::error::{AppError, Result};
use crate::middleware::ProfileScope;
use crate::models::ManifestoSection;
use crate::services::{community, CommunityFeed};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/community/feed", get(get_feed))
        .route("/api/community/rsvps", get(get_rsvps))
        .route("/api/community/rsvps/{event_id}", post(toggle_rsvp))
        .route("/api/manifesto", get(get_manifesto))
}

async fn get_feed(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
) -> Result<Json<CommunityFeed>> {
    Ok(Json(state.coach.community_feed(&scope.profile_id).await?))
}

async fn get_rsvps(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
) -> Result<Json<Vec<String>>> {
    Ok(Json(state.coach.rsvps(&scope.profile_id).await?))
}

/// Toggle the RSVP for a known event.
async fn toggle_rsvp(
    State(state): State<Arc<AppState>>,
    Extension(scope): Extension<ProfileScope>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<String>>> {
    if !community::is_known_event(&event_id) {
        return Err(AppError::NotFound(format!("Event {}", event_id)));
    }

    Ok(Json(
        state
            .coach
            .toggle_rsvp(&scope.profile_id, &event_id)
            .await?,
    ))
}

async fn get_manifesto(State(state): State<Arc<AppState>>) -> Json<Vec<ManifestoSection>> {
    Json(state.coach.manifesto())
}
