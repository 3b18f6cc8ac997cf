use crate::catalog::schema::CatalogDef;
use crate::catalog::{builtin, CatalogStore};
use crate::error::HarvestError;
use std::path::Path;

/// A pluggable backing source for catalog data (e.g. a remote service).
///
/// The engine never talks to the network itself; deployments implement
/// this trait against whatever service populates their catalogs.
pub trait CatalogSource {
    /// Fetch a fresh catalog definition.
    fn fetch(&self) -> Result<CatalogDef, HarvestError>;

    /// Name of the source, for diagnostics.
    fn source_name(&self) -> &str;
}

/// Read a previously cached catalog definition from disk.
pub fn read_cache(path: &Path) -> Result<CatalogDef, HarvestError> {
    let content = std::fs::read_to_string(path).map_err(|e| HarvestError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| HarvestError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write a catalog definition to the cache file. Concurrent writers are
/// tolerated; the last writer wins.
pub fn write_cache(path: &Path, def: &CatalogDef) -> Result<(), HarvestError> {
    let json = serde_json::to_string_pretty(def)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// One-time startup bootstrap: cache file, then the remote source, then
/// the built-in defaults.
///
/// A valid cache is used as-is. Otherwise the source (if any) is fetched
/// and the result cached best-effort; a failed cache write does not fail
/// the bootstrap. If both are unavailable the built-in catalog is used.
/// The returned store is immutable for the process lifetime.
pub fn bootstrap(
    source: Option<&dyn CatalogSource>,
    cache_path: Option<&Path>,
) -> Result<CatalogStore, HarvestError> {
    if let Some(path) = cache_path {
        if let Ok(def) = read_cache(path) {
            if let Ok(store) = CatalogStore::from_def(&def) {
                return Ok(store);
            }
        }
    }

    if let Some(source) = source {
        if let Ok(def) = source.fetch() {
            if let Ok(store) = CatalogStore::from_def(&def) {
                if let Some(path) = cache_path {
                    let _ = write_cache(path, &def);
                }
                return Ok(store);
            }
        }
    }

    builtin::default_catalog()
}
