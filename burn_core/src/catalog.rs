//! Activity catalog: the ordered table of activity definitions.
//!
//! This module provides the built-in activities and the `Catalog` container
//! that both engine functions read from.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Immutable, ordered collection of activity definitions
///
/// Order is significant: it is the iteration order of every result set and
/// the tie-break order for ambiguous name matches. Names are unique
/// (case-sensitive).
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    activities: Vec<ActivityDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names
    pub fn new(activities: Vec<ActivityDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.name.as_str()) {
                return Err(Error::CatalogValidation(format!(
                    "Duplicate activity name '{}'",
                    activity.name
                )));
            }
        }

        Ok(Self { activities })
    }

    /// All activities in insertion order
    pub fn list_activities(&self) -> &[ActivityDefinition] {
        &self.activities
    }

    /// Exact (case-sensitive) lookup by name
    pub fn find(&self, name: &str) -> Option<&ActivityDefinition> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid. Entries
    /// without an intensity model are not reported here: the calculator
    /// recovers from them with an `n/a` placeholder.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.activities.is_empty() {
            errors.push("Catalog has no activities".to_string());
        }

        for activity in &self.activities {
            if activity.name.trim().is_empty() {
                errors.push("Activity has empty name".to_string());
            }

            match activity.intensity {
                Some(IntensityModel::MetabolicEquivalent { met }) => {
                    if !met.is_finite() || met <= 0.0 {
                        errors.push(format!(
                            "Activity '{}': MET value {} must be positive",
                            activity.name, met
                        ));
                    }
                }
                Some(IntensityModel::CaloriesPerRepetition { calories }) => {
                    if !calories.is_finite() || calories <= 0.0 {
                        errors.push(format!(
                            "Activity '{}': calories per rep {} must be positive",
                            activity.name, calories
                        ));
                    }
                }
                None => {}
            }
        }

        errors
    }
}

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in activities
///
/// **Note**: prefer `default_catalog()` in production code; this is kept for
/// tests that want an owned copy.
pub fn build_default_catalog() -> Catalog {
    let activities = vec![
        ActivityDefinition::metabolic("Running (8 km/h)", 8.3)
            .with_guidance("Steady jog, about 7:30 per km")
            .with_image_url(placeholder("RUN")),
        ActivityDefinition::per_repetition("Jumping Jacks", 0.2)
            .with_image_url(placeholder("JJ")),
        ActivityDefinition::metabolic("Cycling (moderate)", 7.5)
            .with_guidance("Around 20 km/h on flat ground")
            .with_image_url(placeholder("CYCLE")),
        ActivityDefinition::metabolic("Walking (brisk)", 5.0)
            .with_guidance("Fast enough that talking takes effort")
            .with_image_url(placeholder("WALK")),
        ActivityDefinition::metabolic("Swimming (moderate)", 6.0)
            .with_image_url(placeholder("SWIM")),
        ActivityDefinition::per_repetition("Push-ups (vigorous)", 0.3)
            .with_image_url(placeholder("PUSH")),
        ActivityDefinition::per_repetition("Burpees (moderate-vigorous)", 0.5)
            .with_image_url(placeholder("BURPEE")),
        ActivityDefinition::metabolic("Hiking (moderate terrain)", 5.0)
            .with_image_url(placeholder("HIKE")),
        ActivityDefinition::metabolic("Skipping Rope (vigorous)", 12.0)
            .with_guidance("Over 120 skips per minute")
            .with_image_url(placeholder("SKIP")),
        ActivityDefinition::metabolic("Dancing (moderate)", 4.5)
            .with_image_url(placeholder("DANCE")),
        ActivityDefinition::metabolic("Yoga (Hatha/General)", 2.5)
            .with_image_url(placeholder("YOGA")),
        ActivityDefinition::metabolic("Rowing Machine (moderate)", 7.0)
            .with_guidance("Roughly 100 watts")
            .with_image_url(placeholder("ROW")),
        ActivityDefinition::metabolic("Stair Climbing (vigorous)", 8.0)
            .with_image_url(placeholder("STAIRS")),
        ActivityDefinition::metabolic("Plank (isometric)", 2.8)
            .with_guidance("Hold in sets, rest as needed")
            .with_image_url(placeholder("PLANK")),
    ];

    Catalog { activities }
}

fn placeholder(label: &str) -> String {
    format!("https://placehold.co/128x128/000/FFF?text={}", label)
}
