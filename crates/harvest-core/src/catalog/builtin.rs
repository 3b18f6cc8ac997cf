use crate::catalog::schema::CatalogDef;
use crate::catalog::CatalogStore;
use crate::error::HarvestError;

const DEFAULT_CATALOG_JSON: &str = include_str!("../../../../catalogs/default.json");

/// The built-in default catalog definition, used when no cache file or
/// remote source is available.
pub fn default_def() -> Result<CatalogDef, HarvestError> {
    let def: CatalogDef = serde_json::from_str(DEFAULT_CATALOG_JSON)?;
    Ok(def)
}

/// Build a store from the built-in default catalog.
pub fn default_catalog() -> Result<CatalogStore, HarvestError> {
    CatalogStore::from_def(&default_def()?)
}
