// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event RSVP membership.

/// Toggle `event_id` in the joined set: remove if present, add if absent.
pub fn toggle(mut joined: Vec<String>, event_id: &str) -> Vec<String> {
    if let Some(pos) = joined.iter().position(|id| id == event_id) {
        joined.retain(|id| id != event_id);
        tracing::debug!(event_id, pos, "RSVP removed");
    } else {
        joined.push(event_id.to_string());
        tracing::debug!(event_id, "RSVP added");
    }
    joined
}
