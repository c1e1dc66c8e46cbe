// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dog profile model.

use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The dog (and owner context) a rhythm is generated for.
///
/// Overwritten wholesale on every edit; one per local profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DogProfile {
    #[validate(custom(function = "crate::models::check_in::validate_not_blank"))]
    pub name: String,
    pub age: String,
    /// Free text, e.g. "Malinois" or "Lab mix"
    pub breed: String,
    pub energy: EnergyLevel,
    pub environment: Environment,
    pub time_available: TimeAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum EnergyLevel {
    Low,
    Moderate,
    High,
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Environment {
    City,
    Suburbs,
    #[serde(rename = "Rural/Wild")]
    RuralWild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TimeAvailable {
    #[serde(rename = "15 mins")]
    Quarter,
    #[serde(rename = "30-60 mins")]
    Standard,
    Unlimited,
}

impl EnergyLevel {
    pub fn label(self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low",
            EnergyLevel::Moderate => "Moderate",
            EnergyLevel::High => "High",
            EnergyLevel::Infinite => "Infinite",
        }
    }
}

impl Environment {
    pub fn label(self) -> &'static str {
        match self {
            Environment::City => "City",
            Environment::Suburbs => "Suburbs",
            Environment::RuralWild => "Rural/Wild",
        }
    }
}

impl TimeAvailable {
    pub fn label(self) -> &'static str {
        match self {
            TimeAvailable::Quarter => "15 mins",
            TimeAvailable::Standard => "30-60 mins",
            TimeAvailable::Unlimited => "Unlimited",
        }
    }
}
