use crate::model::CropFactors;
use serde::{Deserialize, Serialize};

/// Fallback yield factor, tons per acre.
pub const DEFAULT_YIELD_FACTOR: f64 = 0.4;
/// Fallback fraction of yield lost post-harvest.
pub const DEFAULT_WASTE_FACTOR: f64 = 0.1;
/// Fallback crop price, currency units per ton.
pub const DEFAULT_PRICE_PER_TON: f64 = 20000.0;
/// Waste resells at this share of the crop price when no explicit waste
/// price is given.
pub const WASTE_PRICE_SHARE: f64 = 0.1;

/// On-disk catalog schema: the shape of both the built-in catalog, custom
/// catalog files, and the bootstrap cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDef {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub crops: Vec<CropDef>,
}

/// A single crop entry as written in a catalog file. Factor fields are
/// optional; missing ones resolve to the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropDef {
    pub name: String,
    #[serde(default)]
    pub yield_factor: Option<f64>,
    #[serde(default)]
    pub waste_factor: Option<f64>,
    #[serde(default)]
    pub price_per_ton: Option<f64>,
    #[serde(default)]
    pub waste_price_per_ton: Option<f64>,
}

impl CropDef {
    /// Resolve optional fields into a complete factor record.
    pub fn resolve(&self) -> CropFactors {
        let price_per_ton = self.price_per_ton.unwrap_or(DEFAULT_PRICE_PER_TON);
        CropFactors {
            yield_factor: self.yield_factor.unwrap_or(DEFAULT_YIELD_FACTOR),
            waste_factor: self.waste_factor.unwrap_or(DEFAULT_WASTE_FACTOR),
            price_per_ton,
            waste_price_per_ton: self
                .waste_price_per_ton
                .unwrap_or(price_per_ton * WASTE_PRICE_SHARE),
        }
    }
}
