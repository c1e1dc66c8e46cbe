// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and time-derived identifiers.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Last identifier handed out by [`next_record_id`].
static LAST_RECORD_ID: AtomicI64 = AtomicI64::new(0);

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Display date used on check-in records (`YYYY-MM-DD`).
pub fn format_display_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Generate a record id from the creation time in milliseconds.
///
/// Ids are strictly increasing within the process, so two records created
/// in the same millisecond still get distinct ids.
pub fn next_record_id(now: DateTime<Utc>) -> String {
    let candidate = now.timestamp_millis();
    let mut last = LAST_RECORD_ID.load(Ordering::SeqCst);
    loop {
        let id = candidate.max(last + 1);
        match LAST_RECORD_ID.compare_exchange(last, id, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return id.to_string(),
            Err(current) => last = current,
        }
    }
}
