pub mod builtin;
pub mod cache;
pub mod schema;

use crate::error::HarvestError;
use crate::model::CropFactors;
use schema::CatalogDef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The read-only catalogs the engine resolves against: canonical crop
/// names with their factor records, and canonical location names.
///
/// Constructed once at bootstrap and passed by reference into the
/// resolver and orchestrator; never mutated afterward, so concurrent
/// requests share it without locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStore {
    crops: BTreeMap<String, CropFactors>,
    locations: Vec<String>,
}

impl CatalogStore {
    /// Build a store from a parsed catalog definition, resolving factor
    /// defaults and validating invariants.
    pub fn from_def(def: &CatalogDef) -> Result<CatalogStore, HarvestError> {
        validate_def(def)?;

        let mut crops = BTreeMap::new();
        for crop in &def.crops {
            let name = crop.name.trim().to_lowercase();
            if crops.insert(name.clone(), crop.resolve()).is_some() {
                return Err(HarvestError::CatalogInvalid(format!(
                    "duplicate crop '{}'",
                    name
                )));
            }
        }

        // Deduplicate locations, preserving catalog-file order so fuzzy
        // tie-breaks stay stable.
        let mut locations: Vec<String> = Vec::with_capacity(def.locations.len());
        for loc in &def.locations {
            let trimmed = loc.trim().to_string();
            if !locations.contains(&trimmed) {
                locations.push(trimmed);
            }
        }

        Ok(CatalogStore { crops, locations })
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<CatalogStore, HarvestError> {
        let content = std::fs::read_to_string(path).map_err(|e| HarvestError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let def: CatalogDef =
            serde_json::from_str(&content).map_err(|e| HarvestError::CatalogLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        CatalogStore::from_def(&def)
    }

    pub fn crop_names(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }

    pub fn crop(&self, name: &str) -> Option<&CropFactors> {
        self.crops.get(name)
    }

    pub fn crops(&self) -> &BTreeMap<String, CropFactors> {
        &self.crops
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}

/// Validate a catalog definition before building a store.
pub fn validate_def(def: &CatalogDef) -> Result<(), HarvestError> {
    if def.crops.is_empty() {
        return Err(HarvestError::CatalogInvalid("crops must not be empty".into()));
    }
    if def.locations.is_empty() {
        return Err(HarvestError::CatalogInvalid(
            "locations must not be empty".into(),
        ));
    }

    for crop in &def.crops {
        if crop.name.trim().is_empty() {
            return Err(HarvestError::CatalogInvalid(
                "crop name must not be empty".into(),
            ));
        }
        if let Some(y) = crop.yield_factor {
            if !(y >= 0.0) {
                return Err(HarvestError::CatalogInvalid(format!(
                    "crop '{}' has invalid yield_factor {}",
                    crop.name, y
                )));
            }
        }
        if let Some(w) = crop.waste_factor {
            if !(0.0..=1.0).contains(&w) {
                return Err(HarvestError::CatalogInvalid(format!(
                    "crop '{}' has waste_factor {} outside [0, 1]",
                    crop.name, w
                )));
            }
        }
        for (field, value) in [
            ("price_per_ton", crop.price_per_ton),
            ("waste_price_per_ton", crop.waste_price_per_ton),
        ] {
            if let Some(p) = value {
                if !(p >= 0.0) {
                    return Err(HarvestError::CatalogInvalid(format!(
                        "crop '{}' has negative {}",
                        crop.name, field
                    )));
                }
            }
        }
    }

    for loc in &def.locations {
        if loc.trim().is_empty() {
            return Err(HarvestError::CatalogInvalid(
                "location name must not be empty".into(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::CropDef;

    fn crop(name: &str) -> CropDef {
        CropDef {
            name: name.into(),
            yield_factor: Some(0.4),
            waste_factor: Some(0.1),
            price_per_ton: Some(20000.0),
            waste_price_per_ton: None,
        }
    }

    fn def() -> CatalogDef {
        CatalogDef {
            locations: vec!["Durg".into(), "Mumbai".into()],
            crops: vec![crop("rice"), crop("wheat")],
        }
    }

    #[test]
    fn test_from_def_normalizes_crop_names() {
        let mut d = def();
        d.crops[0].name = "  Rice ".into();
        let store = CatalogStore::from_def(&d).unwrap();
        assert!(store.crop("rice").is_some());
    }

    #[test]
    fn test_duplicate_crop_rejected() {
        let mut d = def();
        d.crops.push(crop("Rice"));
        assert!(CatalogStore::from_def(&d).is_err());
    }

    #[test]
    fn test_locations_deduplicated_in_order() {
        let mut d = def();
        d.locations = vec!["Durg".into(), "Mumbai".into(), "Durg".into()];
        let store = CatalogStore::from_def(&d).unwrap();
        assert_eq!(store.locations(), ["Durg", "Mumbai"]);
    }

    #[test]
    fn test_empty_crops_rejected() {
        let mut d = def();
        d.crops.clear();
        assert!(CatalogStore::from_def(&d).is_err());
    }

    #[test]
    fn test_empty_locations_rejected() {
        let mut d = def();
        d.locations.clear();
        assert!(CatalogStore::from_def(&d).is_err());
    }

    #[test]
    fn test_negative_yield_factor_rejected() {
        let mut d = def();
        d.crops[0].yield_factor = Some(-0.1);
        assert!(CatalogStore::from_def(&d).is_err());
    }

    #[test]
    fn test_waste_factor_above_one_rejected() {
        let mut d = def();
        d.crops[0].waste_factor = Some(1.5);
        assert!(CatalogStore::from_def(&d).is_err());
    }

    #[test]
    fn test_nan_yield_factor_rejected() {
        let mut d = def();
        d.crops[0].yield_factor = Some(f64::NAN);
        assert!(CatalogStore::from_def(&d).is_err());
    }

    #[test]
    fn test_crop_names_iterate_sorted() {
        let store = CatalogStore::from_def(&def()).unwrap();
        let names: Vec<&str> = store.crop_names().collect();
        assert_eq!(names, ["rice", "wheat"]);
    }
}
