//! Food catalog: the items a user picks to build a calorie total.
//!
//! The built-in table holds common fast-food items. A custom table can be
//! loaded from TOML:
//!
//! ```toml
//! [[food]]
//! name = "Big Mac"
//! calories = 550
//! brand = "McDonald's"
//! ```

use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Cached default food catalog
static DEFAULT_FOODS: Lazy<FoodCatalog> = Lazy::new(build_default_food_catalog);

/// A single food item with its energy content
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub brand: Option<String>,
    pub image_url: Option<String>,
}

/// Ordered table of food items with case-insensitively unique names
#[derive(Clone, Debug, PartialEq)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

#[derive(Debug, Deserialize)]
struct FoodFile {
    #[serde(default, rename = "food")]
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a food catalog, rejecting duplicate names and bad calorie values
    pub fn new(items: Vec<FoodItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.to_lowercase()) {
                return Err(Error::CatalogValidation(format!(
                    "Duplicate food name '{}'",
                    item.name
                )));
            }
            if !item.calories.is_finite() || item.calories < 0.0 {
                return Err(Error::CatalogValidation(format!(
                    "Food '{}': calories {} must be a non-negative number",
                    item.name, item.calories
                )));
            }
        }

        Ok(Self { items })
    }

    /// All food items in insertion order
    pub fn list_foods(&self) -> &[FoodItem] {
        &self.items
    }

    /// Case-insensitive lookup by full name
    pub fn find(&self, name: &str) -> Option<&FoodItem> {
        let wanted = name.trim().to_lowercase();
        self.items.iter().find(|f| f.name.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum the calories of the named items
    ///
    /// Picking the same food twice counts it twice. An unknown name is an
    /// `InvalidInput` error.
    pub fn total_calories<S: AsRef<str>>(&self, names: &[S]) -> Result<f64> {
        let mut total = 0.0;
        for name in names {
            let name = name.as_ref();
            let item = self.find(name).ok_or_else(|| {
                Error::InvalidInput(format!("Unknown food '{}'", name))
            })?;
            tracing::debug!("Adding {} ({} kcal)", item.name, item.calories);
            total += item.calories;
        }
        Ok(total)
    }
}

/// Get a reference to the cached default food catalog
pub fn default_food_catalog() -> &'static FoodCatalog {
    &DEFAULT_FOODS
}

/// Parse a food catalog from TOML text
pub fn parse_food_catalog(contents: &str) -> Result<FoodCatalog> {
    let file: FoodFile = toml::from_str(contents)?;
    FoodCatalog::new(file.items)
}

/// Load a food catalog from a TOML file
pub fn load_food_catalog(path: &Path) -> Result<FoodCatalog> {
    let contents = std::fs::read_to_string(path)?;
    let foods = parse_food_catalog(&contents)?;
    tracing::info!("Loaded {} foods from {:?}", foods.len(), path);
    Ok(foods)
}

/// Builds the built-in food table
pub fn build_default_food_catalog() -> FoodCatalog {
    let items = vec![
        food("Apple pie", 230.0, "McDonald's", "apple-pie"),
        food("Big Mac", 550.0, "McDonald's", "big-mac"),
        food("Chicken McNuggets (10 pc)", 480.0, "McDonald's", "chicken-mcnuggets-10-pc"),
        food("French Fries (Large)", 510.0, "McDonald's", "french-fries-large-mcdonalds"),
        food("McFlurry Oreo", 340.0, "McDonald's", "mcflurry-oreo"),
        food("Quarter Pounder with Cheese", 540.0, "McDonald's", "quarter-pounder"),
        food("Hot Wings (6 pc)", 570.0, "KFC", "hot-wings-6-pc-kfc"),
        food(
            "Original Recipe Chicken (1 piece)",
            320.0,
            "KFC",
            "original-recipe-chicken-1-piece-kfc",
        ),
        food("Zinger Burger", 450.0, "KFC", "zinger-burger-kfc"),
        food("Whopper", 660.0, "Burger King", "whopper-burger-king"),
        food("Fries (Burger King)", 380.0, "Burger King", "fries-burger-king"),
        food("Chicken Nuggets (9 pc)", 430.0, "Burger King", "chicken-nuggets-burger-king"),
        food("Oreo Shake", 550.0, "Burger King", "oreo-shake-burger-king"),
        food("Caffe Latte (Grande)", 190.0, "Starbucks", "caffe-latte-starbucks"),
        food(
            "Iced White Chocolate Mocha (Grande)",
            420.0,
            "Starbucks",
            "iced-white-chocolate-mocha-starbucks",
        ),
        food("Blueberry Muffin", 350.0, "Starbucks", "blueberry-muffin-starbucks"),
        food("Footlong Turkey Sub", 560.0, "Subway", "footlong-turkey-sub-subway"),
        food("Footlong Italian B.M.T.", 780.0, "Subway", "footlong-bmt-subway"),
        food("Chocolate Chip Cookie", 200.0, "Subway", "chocolate-chip-cookie-subway"),
    ];

    FoodCatalog { items }
}

fn food(name: &str, calories: f64, brand: &str, image: &str) -> FoodItem {
    FoodItem {
        name: name.into(),
        calories,
        brand: Some(brand.into()),
        image_url: Some(format!("/images/{}.jpeg", image)),
    }
}
