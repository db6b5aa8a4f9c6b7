//! Error types for the burn_core library.
//!
//! The equivalence engine itself never fails; these errors come from
//! catalog loading, configuration, and caller-side input checks.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for burn_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Caller-supplied input rejected before reaching the engine
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = Error::InvalidInput("Unknown food 'Unicorn Burger'".into());
        assert_eq!(err.to_string(), "Invalid input: Unknown food 'Unicorn Burger'");

        let err = Error::CatalogValidation("Duplicate activity name 'Yoga'".into());
        assert!(err.to_string().starts_with("Catalog validation error:"));
    }

    #[test]
    fn test_foreign_errors_convert() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/fuelburn/catalog.toml")?)
        }
        assert!(matches!(read_missing(), Err(Error::Io(_))));

        fn parse_bad() -> Result<toml::Table> {
            Ok(toml::from_str("name = ")?)
        }
        assert!(matches!(parse_bad(), Err(Error::Toml(_))));
    }
}
