// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wildcord: daily rhythms, check-ins and pack chat for dog owners
//!
//! This crate provides the backend API: per-profile storage, the rank and
//! check-in aggregation, the pack channel and the AI coach gateway.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::CoachService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub coach: CoachService,
}
