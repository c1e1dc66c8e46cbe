// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wildcord API Server
//!
//! Serves the coach façade over HTTP: profiles and daily rhythms, the pack
//! channel, check-ins with rank progression, and community data.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wildcord::{
    config::{Config, StorageBackend},
    db::{FirestoreStore, KeyValueStore, MemoryStore},
    services::{CoachGateway, CoachService},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Wildcord API");

    // Initialize storage
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Firestore => {
            let store = FirestoreStore::new(&config.gcp_project_id)
                .await
                .expect("Failed to connect to Firestore");
            tracing::info!(project = %config.gcp_project_id, "Firestore storage initialized");
            Arc::new(store)
        }
    };

    // Initialize AI gateway
    let gateway = CoachGateway::from_config(&config).expect("Failed to initialize AI gateway");
    tracing::info!(
        configured = gateway.is_configured(),
        primary = %config.primary_model,
        fallback = %config.fallback_model,
        "AI gateway initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        coach: CoachService::new(store, gateway),
    });

    // Build router
    let app = wildcord::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wildcord=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
