// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod chat;
pub mod check_in;
pub mod community;
pub mod profile;
pub mod rhythm;
pub mod stats;

pub use chat::{ChatMessage, ChatRole};
pub use check_in::{CheckInInput, CheckInSession, CheckInStatus, StatEntry};
pub use community::{CommunityEvent, CommunityPost, Difficulty, EventView, ManifestoSection, PostType};
pub use profile::{DogProfile, EnergyLevel, Environment, TimeAvailable};
pub use rhythm::{DailyRhythm, RhythmSegment, Source};
pub use stats::{RankInfo, UserStats};
