// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in input and history records.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Largest distance accepted on a single check-in.
pub const MAX_CHECK_IN_MILES: f64 = 10_000.0;

/// A periodic self-report submitted by the owner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckInInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub notes: String,
    /// Distance covered this period
    #[validate(custom(function = "validate_distance"))]
    pub miles: f64,
    /// Training sessions this period
    pub sessions: u32,
}

/// One label/value pair of the stats snapshot frozen on a check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

impl StatEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum CheckInStatus {
    Pending,
    Reviewed,
}

/// A submitted check-in. History is stored newest first and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckInSession {
    pub id: String,
    /// Display date (`YYYY-MM-DD`)
    pub date: String,
    pub user_notes: String,
    /// Stats as they stood at submission time
    pub stats_snapshot: Vec<StatEntry>,
    /// `None` when the coach could not produce feedback
    pub coach_feedback: Option<String>,
    pub status: CheckInStatus,
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_distance(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 || value > MAX_CHECK_IN_MILES {
        return Err(ValidationError::new("invalid_distance"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(notes: &str, miles: f64) -> CheckInInput {
        CheckInInput {
            notes: notes.to_string(),
            miles,
            sessions: 2,
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input("Solid week, recall is sharp", 4.5).validate().is_ok());
        assert!(input("Rest week", 0.0).validate().is_ok());
    }

    #[test]
    fn test_blank_notes_rejected() {
        assert!(input("", 3.0).validate().is_err());
        assert!(input("   \n", 3.0).validate().is_err());
    }

    #[test]
    fn test_bad_distance_rejected() {
        assert!(input("notes", -1.0).validate().is_err());
        assert!(input("notes", f64::NAN).validate().is_err());
        assert!(input("notes", f64::INFINITY).validate().is_err());
        assert!(input("notes", 1e308).validate().is_err());
    }

    #[test]
    fn test_distance_upper_bound_inclusive() {
        assert!(input("notes", MAX_CHECK_IN_MILES).validate().is_ok());
        assert!(input("notes", MAX_CHECK_IN_MILES + 0.5).validate().is_err());
    }
}
