// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily rhythm generation through the HTTP surface.

use axum::http::StatusCode;
use std::sync::Arc;
use tower::ServiceExt;
use wildcord::services::ai::{
    CoachGateway, GenerationStrategy, LlmError, ScriptedBackend,
};

mod common;
use common::{body_json, create_test_app_with_gateway, dog_json, scoped_request, RHYTHM_JSON, TEST_PROFILE};

fn two_model_gateway(primary: &Arc<ScriptedBackend>, fallback: &Arc<ScriptedBackend>) -> CoachGateway {
    CoachGateway::new(vec![
        GenerationStrategy::new(primary.clone())
            .grounded()
            .with_temperature(0.7),
        GenerationStrategy::new(fallback.clone()).structured(),
    ])
}

#[tokio::test]
async fn test_generate_saves_profile_and_rhythm() {
    let primary = Arc::new(ScriptedBackend::new("primary"));
    let fallback = Arc::new(ScriptedBackend::new("fallback"));
    primary.push_reply(format!("```json\n{}\n```", RHYTHM_JSON));
    let (app, _) = create_test_app_with_gateway(two_model_gateway(&primary, &fallback));

    let response = app
        .clone()
        .oneshot(scoped_request("POST", "/api/rhythm", TEST_PROFILE, Some(dog_json())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["rhythm"]["theme"], "Concrete Jungle Protocol");

    let stored = body_json(
        app.clone()
            .oneshot(scoped_request("GET", "/api/rhythm", TEST_PROFILE, None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(stored["work"]["title"], "Urban Agility");

    let profile = body_json(
        app.oneshot(scoped_request("GET", "/api/profile", TEST_PROFILE, None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(profile, dog_json());

    assert_eq!(fallback.call_count(), 0);
    let prompt = &primary.requests()[0].turns[0].text;
    assert!(prompt.contains("Specs: 3, Malinois"));
    assert!(prompt.contains("Terrain: City"));
}

#[tokio::test]
async fn test_rate_limited_primary_falls_back() {
    let primary = Arc::new(ScriptedBackend::new("primary"));
    let fallback = Arc::new(ScriptedBackend::new("fallback"));
    primary.push_failure(LlmError::RateLimited);
    fallback.push_reply(RHYTHM_JSON);
    let (app, _) = create_test_app_with_gateway(two_model_gateway(&primary, &fallback));

    let body = body_json(
        app.oneshot(scoped_request("POST", "/api/rhythm", TEST_PROFILE, Some(dog_json())))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(body["rhythm"]["motto"], "Neutral is a skill.");
    assert!(fallback.requests()[0].response_schema.is_some());
}

#[tokio::test]
async fn test_total_failure_returns_null_and_keeps_old_rhythm() {
    let primary = Arc::new(ScriptedBackend::new("primary"));
    let fallback = Arc::new(ScriptedBackend::new("fallback"));
    primary.push_reply(RHYTHM_JSON);
    let (app, _) = create_test_app_with_gateway(two_model_gateway(&primary, &fallback));

    app.clone()
        .oneshot(scoped_request("POST", "/api/rhythm", TEST_PROFILE, Some(dog_json())))
        .await
        .unwrap();

    // Second round: primary garbage, fallback exhausted
    primary.push_reply("Sorry, no plan.");
    let body = body_json(
        app.clone()
            .oneshot(scoped_request("POST", "/api/rhythm", TEST_PROFILE, Some(dog_json())))
            .await
            .unwrap(),
    )
    .await;
    assert!(body["rhythm"].is_null());

    let stored = body_json(
        app.oneshot(scoped_request("GET", "/api/rhythm", TEST_PROFILE, None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(stored["theme"], "Concrete Jungle Protocol");
}
