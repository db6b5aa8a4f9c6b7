//! Equivalence calculator: calories plus body weight in, activity effort out.
//!
//! For every catalog entry, in catalog order:
//! - MET activities become minutes: `calories / (MET * kg * 3.5 / 200)`
//! - Per-rep activities become repetitions: `calories / calories_per_rep`
//! - Entries with no intensity model become an `N/A` placeholder
//!
//! Values are rounded once, after division.

use crate::format::format_display;
use crate::{
    ActivityDefinition, ActivityResult, BurnQuantity, Catalog, IntensityModel, ResultUnit,
};

/// Oxygen uptake at rest in ml/kg/min (one MET)
const RESTING_OXYGEN_ML_PER_KG_MIN: f64 = 3.5;

/// Divisor converting `MET * kg * ml O2` into kcal per minute
const KCAL_DIVISOR: f64 = 200.0;

/// Compute one equivalent per catalog entry for the given calories and weight
///
/// Returns an empty Vec when either magnitude is zero or negative. Otherwise the
/// result has exactly `catalog.len()` entries in catalog order, including
/// placeholders for malformed entries.
pub fn compute_equivalents(
    catalog: &Catalog,
    total_calories: f64,
    body_weight_kg: f64,
) -> Vec<ActivityResult> {
    let quantity = BurnQuantity::new(total_calories, body_weight_kg);
    if quantity.is_non_positive() {
        tracing::debug!(
            "Skipping equivalents for non-positive input ({} kcal, {} kg)",
            total_calories,
            body_weight_kg
        );
        return Vec::new();
    }

    catalog
        .list_activities()
        .iter()
        .map(|activity| evaluate(activity, &quantity))
        .collect()
}

/// Energy burned per minute for a MET value at a given body weight
pub fn calories_per_minute(met: f64, body_weight_kg: f64) -> f64 {
    (met * body_weight_kg * RESTING_OXYGEN_ML_PER_KG_MIN) / KCAL_DIVISOR
}

fn evaluate(activity: &ActivityDefinition, quantity: &BurnQuantity) -> ActivityResult {
    let (raw_value, unit) = match activity.intensity {
        Some(IntensityModel::CaloriesPerRepetition { calories }) => (
            round_count(quantity.total_calories / calories),
            ResultUnit::Reps,
        ),
        Some(IntensityModel::MetabolicEquivalent { met }) => {
            let per_minute = calories_per_minute(met, quantity.body_weight_kg);
            let minutes = if per_minute > 0.0 {
                round_count(quantity.total_calories / per_minute)
            } else {
                0
            };
            (minutes, ResultUnit::Minutes)
        }
        None => {
            tracing::warn!(
                "Activity '{}' has no MET or calories-per-rep value",
                activity.name
            );
            (0, ResultUnit::NotApplicable)
        }
    };

    ActivityResult {
        name: activity.name.clone(),
        raw_value,
        unit,
        display_value: format_display(raw_value, unit),
    }
}

/// Round half away from zero; anything not finite and positive counts as zero
fn round_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
