//! Cumulative check-in statistics and derived rank fields.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Rank fields derived from total miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RankInfo {
    pub rank: String,
    pub next_rank: String,
    pub miles_to_next: f64,
    pub progress_percent: f64,
}

/// Running totals for one profile.
///
/// Stored in the `wildcord_stats` slot. The rank fields are a cache of
/// [`crate::services::rank::calculate_rank`] over `total_miles` and must be
/// refreshed with [`UserStats::with_fresh_rank`] before being trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserStats {
    // ─── Accumulated ─────────────────────────────────────────────
    #[serde(default)]
    pub total_miles: f64,
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub streak_days: u32,
    /// Unix milliseconds of the most recent check-in, 0 = never
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub last_check_in_date: i64,

    // ─── Derived ─────────────────────────────────────────────────
    #[serde(flatten)]
    pub rank: RankInfo,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_miles: 0.0,
            total_sessions: 0,
            streak_days: 0,
            last_check_in_date: 0,
            rank: RankInfo {
                rank: "Greenhorn".to_string(),
                next_rank: "Scout".to_string(),
                miles_to_next: 10.0,
                progress_percent: 0.0,
            },
        }
    }
}

impl UserStats {
    /// Recompute the rank fields from `total_miles`.
    pub fn with_fresh_rank(mut self) -> Self {
        self.rank = crate::services::rank::calculate_rank(self.total_miles);
        self
    }
}
