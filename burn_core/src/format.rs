//! Human-readable display strings for computed results.

use crate::ResultUnit;

/// Format a raw result value for display
///
/// - reps: `"1833 reps"`
/// - minutes: `"1 hr 19 mins"`, `"2 hrs"`, `"45 mins"`, `"0 mins"`
/// - n/a: `"N/A"`
pub fn format_display(raw_value: u64, unit: ResultUnit) -> String {
    match unit {
        ResultUnit::Reps => format!("{} reps", raw_value),
        ResultUnit::Minutes => format_minutes(raw_value),
        ResultUnit::NotApplicable => "N/A".to_string(),
    }
}

/// Split a minute count into hours and minutes
///
/// Singular "hr"/"min" is used only when that component is exactly 1.
pub fn format_minutes(total_minutes: u64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, 0) => "0 mins".to_string(),
        (0, m) => format!("{} {}", m, plural(m, "min", "mins")),
        (h, 0) => format!("{} {}", h, plural(h, "hr", "hrs")),
        (h, m) => format!(
            "{} {} {} {}",
            h,
            plural(h, "hr", "hrs"),
            m,
            plural(m, "min", "mins")
        ),
    }
}

fn plural<'a>(count: u64, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
