// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use std::sync::Arc;
use wildcord::config::Config;
use wildcord::db::{FirestoreStore, KeyValueStore, MemoryStore};
use wildcord::routes::create_router;
use wildcord::services::ai::{CoachGateway, GenerationStrategy, ScriptedBackend};
use wildcord::services::CoachService;
use wildcord::AppState;

/// Profile id used by tests that do not care about isolation.
#[allow(dead_code)]
pub const TEST_PROFILE: &str = "test-profile";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test Firestore store against the emulator.
#[allow(dead_code)]
pub async fn test_store() -> FirestoreStore {
    FirestoreStore::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over in-memory storage and a scripted backend.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(backend: Arc<ScriptedBackend>) -> (axum::Router, Arc<AppState>) {
    let gateway = CoachGateway::new(vec![GenerationStrategy::new(backend).grounded()]);
    create_test_app_with_gateway(gateway)
}

/// Create a test app with an explicit gateway (e.g. unconfigured).
#[allow(dead_code)]
pub fn create_test_app_with_gateway(gateway: CoachGateway) -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(Arc::new(MemoryStore::new()), gateway)
}

/// Create a test app over a caller-owned store.
#[allow(dead_code)]
pub fn create_test_app_with_store(
    store: Arc<dyn KeyValueStore>,
    gateway: CoachGateway,
) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();

    let state = Arc::new(AppState {
        config,
        coach: CoachService::new(store, gateway),
    });

    (create_router(state.clone()), state)
}

/// Build a request scoped to `profile` via the profile header.
#[allow(dead_code)]
pub fn scoped_request(method: &str, uri: &str, profile: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Wildcord-Profile", profile);

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid rhythm as the model would return it.
#[allow(dead_code)]
pub const RHYTHM_JSON: &str = r#"{
    "theme": "Concrete Jungle Protocol",
    "motto": "Neutral is a skill.",
    "ritual": {"title": "Threshold Drills", "duration": "10 min", "activity": "Sit before every door.", "vibe": "Calm"},
    "work": {"title": "Urban Agility", "duration": "45 min", "activity": "Benches, curbs, stairs.", "vibe": "High Octane"},
    "peace": {"title": "Place Command", "duration": "15 min", "activity": "Settle on the mat.", "vibe": "Chill"}
}"#;

/// Profile request body.
#[allow(dead_code)]
pub fn dog_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Koda",
        "age": "3",
        "breed": "Malinois",
        "energy": "High",
        "environment": "City",
        "time_available": "30-60 mins"
    })
}
