//! Core domain types for the Fuel & Burn engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Activity definitions and their intensity models
//! - Burn quantities (calories plus body weight)
//! - Computed activity results

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Activity Types
// ============================================================================

/// How an activity converts calories into effort
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntensityModel {
    /// Continuous/timed activity measured in METs
    MetabolicEquivalent { met: f64 },
    /// Discrete movement with a fixed calorie cost per repetition
    CaloriesPerRepetition { calories: f64 },
}

impl IntensityModel {
    /// The model's reference value, e.g. `"8.3 METs"` or `"0.3 cal/rep"`
    pub fn describe(&self) -> String {
        match self {
            IntensityModel::MetabolicEquivalent { met } => format!("{} METs", met),
            IntensityModel::CaloriesPerRepetition { calories } => {
                format!("{} cal/rep", calories)
            }
        }
    }

    /// The unit results for this model are measured in
    pub fn unit(&self) -> ResultUnit {
        match self {
            IntensityModel::MetabolicEquivalent { .. } => ResultUnit::Minutes,
            IntensityModel::CaloriesPerRepetition { .. } => ResultUnit::Reps,
        }
    }
}

/// A single catalog entry (e.g., "Running (8 km/h)")
///
/// `intensity` is `None` for malformed entries; the calculator still emits
/// a placeholder result for them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityDefinition {
    pub name: String,
    pub intensity: Option<IntensityModel>,
    pub guidance: Option<String>,
    pub image_url: Option<String>,
}

impl ActivityDefinition {
    /// Timed activity with the given MET value
    pub fn metabolic(name: impl Into<String>, met: f64) -> Self {
        Self {
            name: name.into(),
            intensity: Some(IntensityModel::MetabolicEquivalent { met }),
            guidance: None,
            image_url: None,
        }
    }

    /// Repetition-based activity with the given calories per rep
    pub fn per_repetition(name: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            intensity: Some(IntensityModel::CaloriesPerRepetition { calories }),
            guidance: None,
            image_url: None,
        }
    }

    pub fn with_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.guidance = Some(guidance.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Calories to burn off and the weight of the person burning them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurnQuantity {
    pub total_calories: f64,
    pub body_weight_kg: f64,
}

impl BurnQuantity {
    pub fn new(total_calories: f64, body_weight_kg: f64) -> Self {
        Self {
            total_calories,
            body_weight_kg,
        }
    }

    /// True when either magnitude is zero or negative
    ///
    /// This short-circuits the engine to an empty result. NaN and infinity
    /// are not caught here; they flow through and produce zero-valued rows.
    pub fn is_non_positive(&self) -> bool {
        self.total_calories <= 0.0 || self.body_weight_kg <= 0.0
    }
}

// ============================================================================
// Results
// ============================================================================

/// Unit of a computed result
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResultUnit {
    #[serde(rename = "minutes")]
    Minutes,
    #[serde(rename = "reps")]
    Reps,
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl fmt::Display for ResultUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultUnit::Minutes => "minutes",
            ResultUnit::Reps => "reps",
            ResultUnit::NotApplicable => "n/a",
        };
        f.write_str(s)
    }
}

/// One computed equivalent for one catalog entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityResult {
    pub name: String,
    pub raw_value: u64,
    pub unit: ResultUnit,
    pub display_value: String,
}
