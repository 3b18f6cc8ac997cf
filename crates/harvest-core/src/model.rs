use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-crop constants driving the economics calculation.
///
/// All fields are fully resolved at catalog load time: optional fields in
/// the catalog file have already been replaced by their documented
/// defaults, so consumers never probe for missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropFactors {
    /// Tons produced per acre of land.
    pub yield_factor: f64,
    /// Fraction of the yield lost post-harvest, in [0, 1].
    pub waste_factor: f64,
    /// Market price of the crop, currency units per ton.
    pub price_per_ton: f64,
    /// Resale price of the waste fraction, currency units per ton.
    pub waste_price_per_ton: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilCondition {
    Sandy,
    Clay,
    Loamy,
}

impl fmt::Display for SoilCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilCondition::Sandy => write!(f, "sandy"),
            SoilCondition::Clay => write!(f, "clay"),
            SoilCondition::Loamy => write!(f, "loamy"),
        }
    }
}

impl SoilCondition {
    pub const ALL: [SoilCondition; 3] = [
        SoilCondition::Sandy,
        SoilCondition::Clay,
        SoilCondition::Loamy,
    ];

    /// Exact-membership parse. Soil conditions are a closed enum and are
    /// never fuzzy-matched.
    pub fn parse(s: &str) -> Option<SoilCondition> {
        match s {
            "sandy" => Some(SoilCondition::Sandy),
            "clay" => Some(SoilCondition::Clay),
            "loamy" => Some(SoilCondition::Loamy),
            _ => None,
        }
    }

    /// Comma-separated list of the valid options, for error messages.
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single prediction request as received from the transport layer.
///
/// The transport is responsible for presence and type validation (e.g.
/// numeric coercion of `land_area`); the engine assumes `land_area` is a
/// valid non-negative number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub location: String,
    pub land_area: f64,
    pub soil_condition: String,
    pub crop_type: String,
}

/// A successful prediction. Crop and location carry the *canonical*
/// catalog names, never the raw user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub crop_type: String,
    pub location: String,
    pub predicted_yield: f64,
    pub predicted_waste: f64,
    pub price_per_ton: f64,
    pub waste_price_per_ton: f64,
    pub crop_profit: f64,
    pub waste_profit: f64,
    pub total_profit: f64,
}

/// A rejected request (unresolved crop or location, invalid soil).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionError {
    pub error: String,
}

/// The engine's answer to a request: exactly one of a prediction or an
/// error. Serializes untagged so the JSON shape is either the result
/// object or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionOutcome {
    Success(Prediction),
    Error(PredictionError),
}

impl PredictionOutcome {
    pub fn rejected(message: impl Into<String>) -> PredictionOutcome {
        PredictionOutcome::Error(PredictionError {
            error: message.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionOutcome::Success(_))
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            PredictionOutcome::Success(p) => Some(p),
            PredictionOutcome::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PredictionOutcome::Success(_) => None,
            PredictionOutcome::Error(e) => Some(&e.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_parse_exact() {
        assert_eq!(SoilCondition::parse("sandy"), Some(SoilCondition::Sandy));
        assert_eq!(SoilCondition::parse("clay"), Some(SoilCondition::Clay));
        assert_eq!(SoilCondition::parse("loamy"), Some(SoilCondition::Loamy));
    }

    #[test]
    fn test_soil_parse_rejects_near_misses() {
        assert_eq!(SoilCondition::parse("Sandy"), None);
        assert_eq!(SoilCondition::parse("rocky"), None);
        assert_eq!(SoilCondition::parse("sandy "), None);
        assert_eq!(SoilCondition::parse(""), None);
    }

    #[test]
    fn test_soil_options_listing() {
        assert_eq!(SoilCondition::options(), "sandy, clay, loamy");
    }

    #[test]
    fn test_outcome_json_shapes() {
        let err = PredictionOutcome::rejected("nope");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "nope" }));

        let ok = PredictionOutcome::Success(Prediction {
            crop_type: "rice".into(),
            location: "Durg".into(),
            predicted_yield: 40.0,
            predicted_waste: 4.0,
            price_per_ton: 20000.0,
            waste_price_per_ton: 2000.0,
            crop_profit: 800000.0,
            waste_profit: 8000.0,
            total_profit: 808000.0,
        });
        let json = serde_json::to_value(&ok).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["crop_type"], "rice");
    }
}
