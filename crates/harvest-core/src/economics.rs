use crate::model::CropFactors;

/// Output of the deterministic yield/waste/profit calculation.
///
/// All fields are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Tons of crop produced.
    pub predicted_yield: f64,
    /// Tons of yield lost post-harvest.
    pub predicted_waste: f64,
    /// Revenue from selling the yield.
    pub crop_profit: f64,
    /// Revenue from selling the waste fraction.
    pub waste_profit: f64,
    /// Combined revenue.
    pub total_profit: f64,
}

/// Compute yield, waste and the revenue breakdown for a crop on a plot.
///
/// Pure arithmetic over the resolved factor record; `land_area = 0`
/// yields all-zero fields. Rounding is half-away-from-zero on cents,
/// applied consistently to every field.
pub fn estimate(factors: &CropFactors, land_area: f64) -> Estimate {
    let predicted_yield = land_area * factors.yield_factor;
    let predicted_waste = predicted_yield * factors.waste_factor;
    let crop_profit = round2(predicted_yield * factors.price_per_ton);
    let waste_profit = round2(predicted_waste * factors.waste_price_per_ton);

    Estimate {
        predicted_yield: round2(predicted_yield),
        predicted_waste: round2(predicted_waste),
        crop_profit,
        waste_profit,
        // Sum of the rounded components, so the reported breakdown adds up.
        total_profit: round2(crop_profit + waste_profit),
    }
}

/// Round to exactly 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
