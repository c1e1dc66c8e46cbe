// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in aggregation: running totals, streak and the audit snapshot.

use chrono::{DateTime, Utc};

use crate::models::{CheckInInput, CheckInSession, CheckInStatus, StatEntry, UserStats};
use crate::services::rank::calculate_rank;
use crate::time_utils::{format_display_date, next_record_id};

/// Window within which a check-in extends the streak (one week, in ms).
pub const STREAK_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Streak after a check-in at `now`.
///
/// Any check-in within [`STREAK_WINDOW_MS`] of the previous one increments the
/// streak, however soon after it arrives.
pub fn next_streak(stats: &UserStats, now: DateTime<Utc>) -> u32 {
    if stats.last_check_in_date == 0 {
        return 1;
    }

    let gap_ms = now.timestamp_millis() - stats.last_check_in_date;
    if gap_ms < STREAK_WINDOW_MS {
        stats.streak_days.saturating_add(1)
    } else {
        1
    }
}

/// Fold a check-in into the running stats.
pub fn accumulate(stats: &UserStats, input: &CheckInInput, now: DateTime<Utc>) -> UserStats {
    let total_miles = stats.total_miles + input.miles;

    UserStats {
        total_miles,
        total_sessions: stats.total_sessions.saturating_add(input.sessions),
        streak_days: next_streak(stats, now),
        last_check_in_date: now.timestamp_millis(),
        rank: calculate_rank(total_miles),
    }
}

/// Snapshot of this period's numbers for the coach and the history record.
pub fn snapshot(input: &CheckInInput, stats: &UserStats) -> Vec<StatEntry> {
    vec![
        StatEntry::new("Miles Logged This Week", format_number(input.miles)),
        StatEntry::new("Sessions Logged This Week", input.sessions.to_string()),
        StatEntry::new("Current Rank", stats.rank.rank.clone()),
        StatEntry::new("Total Miles", format_number(stats.total_miles)),
    ]
}

/// Build the reviewed history record for a submission.
pub fn build_session(
    input: &CheckInInput,
    stats_snapshot: Vec<StatEntry>,
    coach_feedback: Option<String>,
    now: DateTime<Utc>,
) -> CheckInSession {
    CheckInSession {
        id: next_record_id(now),
        date: format_display_date(now),
        user_notes: input.notes.clone(),
        stats_snapshot,
        coach_feedback,
        status: CheckInStatus::Reviewed,
    }
}

/// Format a distance; whole values print without a trailing `.0`.
fn format_number(value: f64) -> String {
    value.to_string()
}
