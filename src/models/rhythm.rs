// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generated daily rhythm (three-part activity plan).

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One block of the day: ritual, work or peace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RhythmSegment {
    pub title: String,
    pub duration: String,
    pub activity: String,
    /// Mood label, e.g. "High Octane" or "Chill"
    pub vibe: String,
}

/// Citation returned by search-grounded generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

/// The current plan. Replaced wholesale by the next generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyRhythm {
    pub theme: String,
    pub motto: String,
    /// Morning engagement
    pub ritual: RhythmSegment,
    /// Main physical/mental outlet
    pub work: RhythmSegment,
    /// Evening decompression
    pub peace: RhythmSegment,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}
