// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pack channel tests: welcome seeding, send/reply reconciliation and the
//! reply-failed path.

use axum::http::StatusCode;
use std::sync::Arc;
use tower::ServiceExt;
use wildcord::models::{ChatRole, Source};
use wildcord::services::ai::{LlmError, ScriptedBackend};
use wildcord::services::ChatSync;

mod common;
use common::{body_json, create_test_app, scoped_request, TEST_PROFILE};

#[tokio::test]
async fn test_history_seeding_is_idempotent() {
    let (app, _) = create_test_app(Arc::new(ScriptedBackend::new("m")));

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(scoped_request("GET", "/api/pack/history", TEST_PROFILE, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(body_json(response).await);
    }

    let first = bodies[0].as_array().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0]["id"], "init");
    assert_eq!(first[0]["role"], "model");
    assert_eq!(bodies[0], bodies[1]);
}

#[tokio::test]
async fn test_send_message_reconciles_reply() {
    let backend = Arc::new(ScriptedBackend::new("m"));
    backend.push_reply_with_sources(
        "Five minutes of engagement beats zero minutes of perfection.",
        vec![Source {
            title: "Pack Notes".to_string(),
            uri: "https://example.com/notes".to_string(),
        }],
    );
    let (app, _) = create_test_app(backend.clone());

    app.clone()
        .oneshot(scoped_request("GET", "/api/pack/history", TEST_PROFILE, None))
        .await
        .unwrap();

    let response = app
        .oneshot(scoped_request(
            "POST",
            "/api/pack/messages",
            TEST_PROFILE,
            Some(serde_json::json!({"text": "Work is crushing me this week"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "reconciled");
    assert!(body.get("notice").is_none());

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["text"], "Work is crushing me this week");
    assert_eq!(messages[2]["role"], "model");
    assert_eq!(messages[2]["sources"][0]["title"], "Pack Notes");

    let user_id: i64 = messages[1]["id"].as_str().unwrap().parse().unwrap();
    let model_id: i64 = messages[2]["id"].as_str().unwrap().parse().unwrap();
    assert!(model_id > user_id);

    // Prior history went to the provider as turns
    let request = &backend.requests()[0];
    assert_eq!(request.turns.len(), 2);
    assert_eq!(request.turns[0].role, ChatRole::Model);
}

#[tokio::test]
async fn test_failed_reply_keeps_user_message() {
    let backend = Arc::new(ScriptedBackend::new("m"));
    backend.push_failure(LlmError::NetworkError("connection reset".to_string()));
    let (_, state) = create_test_app(backend);

    let outcome = state
        .coach
        .send_message(TEST_PROFILE, "Anyone out there?")
        .await
        .unwrap();

    assert_eq!(
        outcome.sync,
        ChatSync::ReplyFailed {
            notice: "The radio silence is deafening. Check your connection.".to_string()
        }
    );
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.messages[0].role, ChatRole::User);

    let stored = state.coach.chat_history(TEST_PROFILE).await.unwrap();
    assert_eq!(stored, outcome.messages);
}

#[tokio::test]
async fn test_history_grows_across_sends() {
    let backend = Arc::new(ScriptedBackend::new("m"));
    backend.push_reply("Copy.");
    backend.push_failure(LlmError::RateLimited);
    backend.push_reply("Copy again.");
    let (_, state) = create_test_app(backend);

    let mut previous = 0;
    for text in ["one", "two", "three"] {
        let outcome = state.coach.send_message(TEST_PROFILE, text).await.unwrap();
        assert!(outcome.messages.len() > previous);
        previous = outcome.messages.len();
    }

    // user+model, user, user+model
    assert_eq!(previous, 5);

    let history = state.coach.chat_history(TEST_PROFILE).await.unwrap();
    let mut ids: Vec<&str> = history.iter().map(|m| m.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let backend = Arc::new(ScriptedBackend::new("m"));
    let (app, _) = create_test_app(backend.clone());

    let response = app
        .oneshot(scoped_request(
            "POST",
            "/api/pack/messages",
            TEST_PROFILE,
            Some(serde_json::json!({"text": "   "})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(backend.call_count(), 0);
}
