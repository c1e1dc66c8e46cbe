// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed reference data (read-only).

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostType {
    Intel,
    Announcement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommunityPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
    pub author: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
}

/// Event difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Difficulty {
    Greenhorn,
    Scout,
    Ranger,
    Apex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Base head count, not including the viewer
    pub attendees: u32,
}

/// An event as seen by one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EventView {
    #[serde(flatten)]
    pub event: CommunityEvent,
    /// Whether this profile has RSVP'd
    pub attending: bool,
}

impl EventView {
    pub fn new(event: CommunityEvent, attending: bool) -> Self {
        let mut event = event;
        if attending {
            event.attendees += 1;
        }
        Self { event, attending }
    }
}

/// One section of the manifesto page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ManifestoSection {
    pub id: String,
    pub title: String,
    pub content: Vec<String>,
}
