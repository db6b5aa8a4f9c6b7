#![forbid(unsafe_code)]

//! Core domain model and calculations for Fuel & Burn.
//!
//! This crate provides:
//! - Domain types (activity definitions, intensity models, results)
//! - The activity catalog (built-in and TOML-loaded)
//! - The food catalog used to build calorie totals
//! - Equivalence calculator (calories to minutes or reps)
//! - Split-plan composer (one calorie total across several activities)
//! - Configuration and logging setup for front ends

pub mod types;
pub mod error;
pub mod catalog;
pub mod catalog_file;
pub mod food;
pub mod config;
pub mod logging;
pub mod format;
pub mod engine;
pub mod split_plan;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, default_catalog, Catalog};
pub use catalog_file::{load_catalog, parse_catalog};
pub use food::{
    default_food_catalog, load_food_catalog, parse_food_catalog, FoodCatalog, FoodItem,
};
pub use config::Config;
pub use format::format_display;
pub use engine::{calories_per_minute, compute_equivalents};
pub use split_plan::{compute_split_plan, summarize_split, SplitPlan};
