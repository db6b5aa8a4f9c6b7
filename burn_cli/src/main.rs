use burn_core::*;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fuelburn")]
#[command(about = "Turn food calories into the exercise needed to burn them off", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use a custom activity catalog (TOML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Use a custom food table (TOML)
    #[arg(long, global = true)]
    food_table: Option<PathBuf>,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// What was eaten and who is burning it off
#[derive(Args)]
struct Intake {
    /// Food from the food table (repeat to add several; see `fuelburn foods`)
    #[arg(long = "food")]
    foods: Vec<String>,

    /// Calories of an item not in the food table (repeatable)
    #[arg(long = "calories")]
    calories: Vec<f64>,

    /// Body weight in kg (falls back to body.default_weight_kg)
    #[arg(long)]
    weight: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how long (or how many reps) every activity takes
    Equivalents {
        #[command(flatten)]
        intake: Intake,
    },

    /// Split the calories evenly across chosen activities
    Split {
        /// Activity to include (repeat for more; partial names match)
        #[arg(long = "activity", required = true)]
        activities: Vec<String>,

        #[command(flatten)]
        intake: Intake,
    },

    /// List the activity catalog with its MET and per-rep values
    Catalog,

    /// List the food table
    Foods,
}

/// Catalog listing row (flat so it also works as CSV)
#[derive(Serialize)]
struct CatalogRow<'a> {
    name: &'a str,
    intensity: String,
    guidance: Option<&'a str>,
    image_url: Option<&'a str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    burn_core::logging::init_with_level(burn_core::logging::level_for_verbosity(cli.verbose));

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Load catalogs
    let loaded;
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let catalog: &Catalog = match catalog_path {
        Some(path) => {
            loaded = load_catalog(&path)?;
            &loaded
        }
        None => default_catalog(),
    };
    tracing::debug!("Using catalog with {} activities", catalog.len());

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let loaded_foods;
    let foods_path = cli
        .food_table
        .clone()
        .or_else(|| config.catalog.foods_path.clone());
    let foods: &FoodCatalog = match foods_path {
        Some(path) => {
            loaded_foods = load_food_catalog(&path)?;
            &loaded_foods
        }
        None => default_food_catalog(),
    };
    tracing::debug!("Using food table with {} items", foods.len());

    match cli.command {
        Commands::Equivalents { intake } => {
            let total = total_calories(&intake, foods)?;
            let weight = resolve_weight(intake.weight, &config)?;
            cmd_equivalents(catalog, &intake, total, weight, cli.format)
        }
        Commands::Split { activities, intake } => {
            let total = total_calories(&intake, foods)?;
            let weight = resolve_weight(intake.weight, &config)?;
            cmd_split(catalog, &activities, &intake, total, weight, cli.format)
        }
        Commands::Catalog => cmd_catalog(catalog, cli.format),
        Commands::Foods => cmd_foods(foods, cli.format),
    }
}

fn cmd_equivalents(
    catalog: &Catalog,
    intake: &Intake,
    total: f64,
    weight: f64,
    format: OutputFormat,
) -> Result<()> {
    let results = compute_equivalents(catalog, total, weight);

    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Csv => write_csv(&results),
        OutputFormat::Text => {
            print_foods(intake);
            println!(
                "To burn off {} calories at {} kg:",
                fmt_quantity(total),
                fmt_quantity(weight)
            );
            println!();
            print_results(&results);
            Ok(())
        }
    }
}

fn cmd_split(
    catalog: &Catalog,
    activities: &[String],
    intake: &Intake,
    total: f64,
    weight: f64,
    format: OutputFormat,
) -> Result<()> {
    let plan = summarize_split(catalog, activities, total, weight);

    match format {
        OutputFormat::Json => print_json(&plan),
        OutputFormat::Csv => write_csv(&plan.results),
        OutputFormat::Text => {
            if plan.results.is_empty() {
                println!(
                    "No activities in the catalog match: {}",
                    plan.selected.join(", ")
                );
                return Ok(());
            }

            print_foods(intake);
            println!("Your Split Burn Plan");
            println!(
                "Dividing {} calories across {} ({} each)",
                fmt_quantity(plan.total_calories),
                plan.selected.join(", "),
                fmt_quantity(plan.calories_per_activity)
            );
            println!();
            print_results(&plan.results);
            Ok(())
        }
    }
}

fn cmd_catalog(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let rows: Vec<CatalogRow> = catalog
        .list_activities()
        .iter()
        .map(|a| CatalogRow {
            name: &a.name,
            intensity: a
                .intensity
                .map(|i| i.describe())
                .unwrap_or_else(|| "N/A".to_string()),
            guidance: a.guidance.as_deref(),
            image_url: a.image_url.as_deref(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => write_csv(&rows),
        OutputFormat::Text => {
            for row in &rows {
                match row.guidance {
                    Some(guidance) => {
                        println!("  {}: {} ({})", row.name, row.intensity, guidance)
                    }
                    None => println!("  {}: {}", row.name, row.intensity),
                }
            }
            Ok(())
        }
    }
}

fn cmd_foods(foods: &FoodCatalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(foods.list_foods()),
        OutputFormat::Csv => write_csv(foods.list_foods()),
        OutputFormat::Text => {
            for item in foods.list_foods() {
                match item.brand.as_deref() {
                    Some(brand) => println!(
                        "  {} ({}): {} calories",
                        item.name,
                        brand,
                        fmt_quantity(item.calories)
                    ),
                    None => println!("  {}: {} calories", item.name, fmt_quantity(item.calories)),
                }
            }
            Ok(())
        }
    }
}

/// Sum the calories of all selected food items and raw calorie entries
fn total_calories(intake: &Intake, foods: &FoodCatalog) -> Result<f64> {
    if intake.calories.iter().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(Error::InvalidInput(
            "Calories must be non-negative numbers".into(),
        ));
    }

    let raw: f64 = intake.calories.iter().sum();
    let total = raw + foods.total_calories(&intake.foods)?;
    if total <= 0.0 {
        return Err(Error::InvalidInput(
            "Select at least one food with calories".into(),
        ));
    }
    Ok(total)
}

fn resolve_weight(weight: Option<f64>, config: &Config) -> Result<f64> {
    let weight = weight.or(config.body.default_weight_kg).ok_or_else(|| {
        Error::InvalidInput(
            "No weight given; pass --weight or set body.default_weight_kg in the config".into(),
        )
    })?;
    config.check_weight(weight)
}

fn print_foods(intake: &Intake) {
    if !intake.foods.is_empty() {
        println!("Foods: {}", intake.foods.join(", "));
    }
}

fn print_results(results: &[ActivityResult]) {
    for result in results {
        println!("  {}: {}", result.name, result.display_value);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Calories or kilograms for display: one decimal, halves rounded away from
/// zero, no decimal point for whole numbers
fn fmt_quantity(value: f64) -> String {
    let tenths = (value * 10.0).round() / 10.0;
    if tenths.fract() == 0.0 {
        format!("{:.0}", tenths)
    } else {
        format!("{:.1}", tenths)
    }
}
