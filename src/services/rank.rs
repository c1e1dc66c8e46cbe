// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rank tiers derived from cumulative distance.

use crate::models::RankInfo;

/// A named tier and the distance needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankTier {
    pub name: &'static str,
    pub min_miles: f64,
}

/// Tier table, strictly ascending by `min_miles`, starting at zero.
pub const RANKS: [RankTier; 5] = [
    RankTier {
        name: "Greenhorn",
        min_miles: 0.0,
    },
    RankTier {
        name: "Scout",
        min_miles: 10.0,
    },
    RankTier {
        name: "Ranger",
        min_miles: 50.0,
    },
    RankTier {
        name: "Apex Predator",
        min_miles: 150.0,
    },
    RankTier {
        name: "Legend",
        min_miles: 500.0,
    },
];

/// Label of the synthetic tier past the last real one.
pub const MAX_RANK: &str = "Max Rank";

/// Map total miles to the current tier and progress toward the next.
///
/// Negative or non-finite input is treated as zero. Past the top tier the
/// "next" tier is synthetic, sitting at twice the current distance.
pub fn calculate_rank(total_miles: f64) -> RankInfo {
    let miles = if total_miles.is_finite() {
        total_miles.max(0.0)
    } else {
        0.0
    };

    let index = RANKS
        .iter()
        .rposition(|tier| miles >= tier.min_miles)
        .unwrap_or(0);
    let current = RANKS[index];
    let next = RANKS.get(index + 1).copied().unwrap_or(RankTier {
        name: MAX_RANK,
        min_miles: (miles * 2.0).min(f64::MAX),
    });

    let span = next.min_miles - current.min_miles;
    debug_assert!(
        span > 0.0 || next.name == MAX_RANK,
        "rank table must be strictly ascending"
    );
    let progress = if span > 0.0 {
        ((miles - current.min_miles) / span * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    RankInfo {
        rank: current.name.to_string(),
        next_rank: next.name.to_string(),
        miles_to_next: next.min_miles - miles,
        progress_percent: progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_miles_is_lowest_tier() {
        let info = calculate_rank(0.0);
        assert_eq!(info.rank, "Greenhorn");
        assert_eq!(info.next_rank, "Scout");
        assert_eq!(info.progress_percent, 0.0);
        assert_eq!(info.miles_to_next, 10.0);
    }

    #[test]
    fn test_exact_tier_boundary() {
        let info = calculate_rank(10.0);
        assert_eq!(info.rank, "Scout");
        assert_eq!(info.next_rank, "Ranger");
        assert_eq!(info.progress_percent, 0.0);
        assert_eq!(info.miles_to_next, 40.0);
    }

    #[test]
    fn test_progress_within_tier() {
        let info = calculate_rank(30.0);
        assert_eq!(info.rank, "Scout");
        assert_eq!(info.progress_percent, 50.0);
        assert_eq!(info.miles_to_next, 20.0);
    }

    #[test]
    fn test_top_tier_uses_synthetic_next() {
        let info = calculate_rank(500.0);
        assert_eq!(info.rank, "Legend");
        assert_eq!(info.next_rank, MAX_RANK);
        assert_eq!(info.miles_to_next, 500.0);
        assert_eq!(info.progress_percent, 0.0);

        let info = calculate_rank(800.0);
        assert_eq!(info.rank, "Legend");
        assert_eq!(info.miles_to_next, 800.0);
        assert!((info.progress_percent - 27.272727).abs() < 1e-4);
    }

    #[test]
    fn test_huge_total_keeps_next_tier_finite() {
        let info = calculate_rank(f64::MAX);
        assert_eq!(info.rank, "Legend");
        assert!(info.miles_to_next.is_finite());
        assert!(info.progress_percent.is_finite());
    }

    #[test]
    fn test_invalid_input_clamped_to_zero() {
        assert_eq!(calculate_rank(-5.0), calculate_rank(0.0));
        assert_eq!(calculate_rank(f64::NAN), calculate_rank(0.0));
    }

    #[test]
    fn test_progress_always_in_range_and_tier_reached() {
        let mut miles = 0.0;
        while miles < 1200.0 {
            let info = calculate_rank(miles);
            assert!((0.0..=100.0).contains(&info.progress_percent), "miles={}", miles);

            let tier = RANKS
                .iter()
                .find(|t| t.name == info.rank)
                .expect("rank must come from the table");
            assert!(tier.min_miles <= miles, "miles={}", miles);

            miles += 2.5;
        }
    }
}
