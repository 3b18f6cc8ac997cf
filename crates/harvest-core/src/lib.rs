pub mod catalog;
pub mod economics;
pub mod error;
pub mod matching;
pub mod model;

use catalog::CatalogStore;
use model::{Prediction, PredictionOutcome, PredictionRequest, SoilCondition};

/// Knobs for a prediction run.
#[derive(Debug, Clone, Copy)]
pub struct PredictOptions {
    /// Minimum fuzzy-match score (0-100) for crop and location resolution.
    pub threshold: u8,
}

impl Default for PredictOptions {
    fn default() -> Self {
        PredictOptions {
            threshold: matching::DEFAULT_THRESHOLD,
        }
    }
}

/// Main API entry point: estimate yield, waste and profit for a request.
///
/// Resolves the crop, then the location, then validates the soil
/// condition; the first failing step short-circuits into an error
/// outcome. A successful outcome carries the canonical catalog names,
/// never the raw user input. Pure over the immutable store; safe to call
/// concurrently.
pub fn predict(
    store: &CatalogStore,
    request: &PredictionRequest,
    options: &PredictOptions,
) -> PredictionOutcome {
    let Some(crop_match) =
        matching::resolve_best(&request.crop_type, store.crop_names(), options.threshold)
    else {
        return PredictionOutcome::rejected(format!(
            "Crop type '{}' not recognized",
            request.crop_type
        ));
    };

    let Some(location_match) = matching::resolve_best(
        &request.location,
        store.locations().iter().map(String::as_str),
        options.threshold,
    ) else {
        return PredictionOutcome::rejected(format!(
            "Location '{}' not found",
            request.location
        ));
    };

    if SoilCondition::parse(&request.soil_condition).is_none() {
        return PredictionOutcome::rejected(format!(
            "Invalid soil condition '{}'. Choose from: {}",
            request.soil_condition,
            SoilCondition::options()
        ));
    }

    let Some(factors) = store.crop(&crop_match.name) else {
        // Resolved names come from the store's own keys, so this lookup
        // only fails on a malformed catalog.
        return PredictionOutcome::rejected(format!(
            "Crop type '{}' not recognized",
            request.crop_type
        ));
    };

    let estimate = economics::estimate(factors, request.land_area);

    PredictionOutcome::Success(Prediction {
        crop_type: crop_match.name,
        location: location_match.name,
        predicted_yield: estimate.predicted_yield,
        predicted_waste: estimate.predicted_waste,
        price_per_ton: economics::round2(factors.price_per_ton),
        waste_price_per_ton: economics::round2(factors.waste_price_per_ton),
        crop_profit: estimate.crop_profit,
        waste_profit: estimate.waste_profit,
        total_profit: estimate.total_profit,
    })
}
