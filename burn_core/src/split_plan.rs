//! Split-plan composer: divide a calorie total across chosen activities.
//!
//! The whole catalog is evaluated once at the per-activity share, then
//! filtered down to the entries matching the selection. Matching is a
//! case-insensitive substring test in either direction so that a bare
//! "Push-ups" selects the catalog's "Push-ups (vigorous)".

use crate::engine::compute_equivalents;
use crate::{ActivityResult, BurnQuantity, Catalog};
use serde::Serialize;

/// A split plan together with the share each activity was given
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SplitPlan {
    pub total_calories: f64,
    pub calories_per_activity: f64,
    pub selected: Vec<String>,
    pub results: Vec<ActivityResult>,
}

/// Divide `total_calories` evenly across `selected_names` and compute the plan
///
/// Results come back in catalog order, not selection order. Returns an
/// empty Vec when the selection is empty, either magnitude is zero or negative,
/// or nothing in the catalog matches.
pub fn compute_split_plan<S: AsRef<str>>(
    catalog: &Catalog,
    selected_names: &[S],
    total_calories: f64,
    body_weight_kg: f64,
) -> Vec<ActivityResult> {
    if selected_names.is_empty()
        || BurnQuantity::new(total_calories, body_weight_kg).is_non_positive()
    {
        return Vec::new();
    }

    let per_activity = total_calories / selected_names.len() as f64;
    let selections: Vec<String> = selected_names
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let plan: Vec<ActivityResult> = compute_equivalents(catalog, per_activity, body_weight_kg)
        .into_iter()
        .filter(|result| matches_any(&result.name, &selections))
        .collect();

    if plan.is_empty() {
        tracing::debug!(
            "No catalog entries matched selection {:?}",
            selections
        );
    }

    plan
}

/// Compute a split plan and keep the inputs alongside it for display
pub fn summarize_split<S: AsRef<str>>(
    catalog: &Catalog,
    selected_names: &[S],
    total_calories: f64,
    body_weight_kg: f64,
) -> SplitPlan {
    let calories_per_activity = if selected_names.is_empty() {
        0.0
    } else {
        total_calories / selected_names.len() as f64
    };

    SplitPlan {
        total_calories,
        calories_per_activity,
        selected: selected_names
            .iter()
            .map(|s| s.as_ref().to_string())
            .collect(),
        results: compute_split_plan(catalog, selected_names, total_calories, body_weight_kg),
    }
}

/// Case-insensitive substring match in either direction
///
/// `selections` must already be lowercased.
fn matches_any(name: &str, selections: &[String]) -> bool {
    let name = name.to_lowercase();
    selections
        .iter()
        .any(|sel| name.contains(sel.as_str()) || sel.contains(name.as_str()))
}
