use harvest_core::error::HarvestError;
use harvest_core::model::PredictionOutcome;

pub fn print(outcome: &PredictionOutcome) -> Result<(), HarvestError> {
    let json = serde_json::to_string_pretty(outcome)?;
    println!("{json}");
    Ok(())
}
