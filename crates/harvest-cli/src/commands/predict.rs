use harvest_core::catalog::{builtin, CatalogStore};
use harvest_core::error::HarvestError;
use harvest_core::model::{PredictionOutcome, PredictionRequest};
use harvest_core::PredictOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    location: String,
    land_area: f64,
    soil: String,
    crop: String,
    catalog: Option<PathBuf>,
    threshold: u8,
    output_format: &str,
) -> Result<(), HarvestError> {
    let store = match catalog {
        Some(path) => CatalogStore::load(&path)?,
        None => builtin::default_catalog()?,
    };

    let request = PredictionRequest {
        location,
        land_area,
        soil_condition: soil,
        crop_type: crop,
    };

    let outcome = harvest_core::predict(&store, &request, &PredictOptions { threshold });

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print(&outcome),
    }

    // A rejected request is a user-input problem, not an internal fault;
    // it still exits nonzero so scripts can tell the cases apart.
    if !outcome.is_success() {
        std::process::exit(2);
    }

    Ok(())
}
