mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "harvest",
    version,
    about = "Crop yield, waste and profit estimator for farmers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate yield, waste and profit for a crop on a plot of land
    Predict {
        /// Free-text location name (fuzzy-matched against the catalog)
        #[arg(short, long)]
        location: String,

        /// Land area in acres
        #[arg(short = 'a', long = "land-area", value_name = "ACRES", value_parser = parse_land_area)]
        land_area: f64,

        /// Soil condition: sandy, clay or loamy
        #[arg(short, long)]
        soil: String,

        /// Free-text crop name (fuzzy-matched against the catalog)
        #[arg(short, long)]
        crop: String,

        /// Custom catalog JSON file (default: built-in catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Minimum similarity score (0-100) to accept a fuzzy match
        #[arg(long, default_value_t = harvest_core::matching::DEFAULT_THRESHOLD)]
        threshold: u8,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect crop/location catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the crops and locations in a catalog
    List {
        /// Custom catalog JSON file (default: built-in catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

/// The transport layer owns numeric validation of the land area; the
/// engine assumes a valid non-negative number.
fn parse_land_area(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("land area must be a non-negative number, got {s}"));
    }
    Ok(value)
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            location,
            land_area,
            soil,
            crop,
            catalog,
            threshold,
            output,
        } => commands::predict::run(location, land_area, soil, crop, catalog, threshold, &output),
        Commands::Catalog { action } => match action {
            CatalogAction::List { catalog } => commands::catalog::list(catalog),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
