// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod ai;
pub mod chat;
pub mod check_in;
pub mod coach;
pub mod community;
pub mod rank;
pub mod rsvp;

pub use ai::CoachGateway;
pub use chat::{ChatOutcome, ChatSync};
pub use coach::{CheckInResult, CoachService};
pub use community::CommunityFeed;
pub use rank::calculate_rank;
