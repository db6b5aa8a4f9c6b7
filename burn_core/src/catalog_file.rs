//! Custom activity catalogs loaded from TOML.
//!
//! File format:
//!
//! ```toml
//! [[activity]]
//! name = "Running (8 km/h)"
//! met = 8.3
//! guidance = "Steady jog"
//!
//! [[activity]]
//! name = "Push-ups (vigorous)"
//! calories_per_rep = 0.3
//! ```
//!
//! An entry with neither `met` nor `calories_per_rep` is kept; the
//! calculator reports it as `N/A`.

use crate::{ActivityDefinition, Catalog, IntensityModel, Result};
use serde::Deserialize;
use std::path::Path;

/// Catalog file format
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "activity")]
    activities: Vec<ActivityEntry>,
}

#[derive(Debug, Deserialize)]
struct ActivityEntry {
    name: String,
    met: Option<f64>,
    calories_per_rep: Option<f64>,
    guidance: Option<String>,
    image_url: Option<String>,
}

impl From<ActivityEntry> for ActivityDefinition {
    fn from(entry: ActivityEntry) -> Self {
        let intensity = match (entry.calories_per_rep, entry.met) {
            (Some(calories), met) => {
                if met.is_some() {
                    tracing::debug!(
                        "Activity '{}' has both met and calories_per_rep; using calories_per_rep",
                        entry.name
                    );
                }
                Some(IntensityModel::CaloriesPerRepetition { calories })
            }
            (None, Some(met)) => Some(IntensityModel::MetabolicEquivalent { met }),
            (None, None) => None,
        };

        ActivityDefinition {
            name: entry.name,
            intensity,
            guidance: entry.guidance,
            image_url: entry.image_url,
        }
    }
}

/// Parse a catalog from TOML text
///
/// Fails on malformed TOML or duplicate activity names.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(contents)?;
    Catalog::new(file.activities.into_iter().map(Into::into).collect())
}

/// Load a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;
    tracing::info!(
        "Loaded {} activities from {:?}",
        catalog.len(),
        path
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_catalog_preserves_order() {
        let toml_str = r#"
[[activity]]
name = "Walking (brisk)"
met = 5.0
guidance = "Brisk pace"

[[activity]]
name = "Push-ups"
calories_per_rep = 0.3

[[activity]]
name = "Rowing"
met = 7.0
image_url = "https://example.com/row.png"
"#;
        let catalog = parse_catalog(toml_str).unwrap();
        let activities = catalog.list_activities();

        assert_eq!(activities.len(), 3);
        assert_eq!(activities[0].name, "Walking (brisk)");
        assert_eq!(
            activities[0].intensity,
            Some(IntensityModel::MetabolicEquivalent { met: 5.0 })
        );
        assert_eq!(activities[0].guidance.as_deref(), Some("Brisk pace"));
        assert_eq!(
            activities[1].intensity,
            Some(IntensityModel::CaloriesPerRepetition { calories: 0.3 })
        );
        assert_eq!(
            activities[2].image_url.as_deref(),
            Some("https://example.com/row.png")
        );
    }

    #[test]
    fn test_calories_per_rep_wins_over_met() {
        let toml_str = r#"
[[activity]]
name = "Jumping Jacks"
met = 8.0
calories_per_rep = 0.2
"#;
        let catalog = parse_catalog(toml_str).unwrap();
        assert_eq!(
            catalog.list_activities()[0].intensity,
            Some(IntensityModel::CaloriesPerRepetition { calories: 0.2 })
        );
    }

    #[test]
    fn test_entry_without_intensity_is_kept() {
        let toml_str = r#"
[[activity]]
name = "Mystery"
"#;
        let catalog = parse_catalog(toml_str).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.list_activities()[0].intensity.is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let toml_str = r#"
[[activity]]
name = "Yoga"
met = 2.5

[[activity]]
name = "Yoga"
met = 3.5
"#;
        assert!(matches!(
            parse_catalog(toml_str),
            Err(Error::CatalogValidation(_))
        ));
    }

    #[test]
    fn test_malformed_toml_returns_error() {
        assert!(matches!(
            parse_catalog("[[activity]\nname = "),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("catalog.toml");
        std::fs::write(&path, "[[activity]]\nname = \"Hiking\"\nmet = 5.0\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert!(catalog.find("Hiking").is_some());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.toml");

        assert!(matches!(load_catalog(&path), Err(Error::Io(_))));
    }
}
