use harvest_core::model::PredictionOutcome;

pub fn print(outcome: &PredictionOutcome) {
    match outcome {
        PredictionOutcome::Success(p) => {
            println!("Prediction for {} in {}\n", p.crop_type, p.location);
            println!("  Expected yield   {:>14.2} tons", p.predicted_yield);
            println!("  Expected waste   {:>14.2} tons", p.predicted_waste);
            println!();
            println!("  Crop price       {:>14.2} per ton", p.price_per_ton);
            println!("  Waste price      {:>14.2} per ton", p.waste_price_per_ton);
            println!();
            println!("  Crop profit      {:>14.2}", p.crop_profit);
            println!("  Waste profit     {:>14.2}", p.waste_profit);
            println!("  Total profit     {:>14.2}", p.total_profit);
        }
        PredictionOutcome::Error(e) => {
            eprintln!("{}", e.error);
        }
    }
}
