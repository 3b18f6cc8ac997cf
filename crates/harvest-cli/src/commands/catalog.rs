use harvest_core::catalog::{builtin, CatalogStore};
use harvest_core::error::HarvestError;
use std::path::{Path, PathBuf};

pub fn list(catalog: Option<PathBuf>) -> Result<(), HarvestError> {
    let store = match catalog {
        Some(path) => CatalogStore::load(&path)?,
        None => builtin::default_catalog()?,
    };

    println!("Crops:\n");
    let max_name = store
        .crop_names()
        .map(|n| n.len())
        .max()
        .unwrap_or(10);
    for (name, factors) in store.crops() {
        println!(
            "  {:<width$}  yield {:.2} t/acre, waste {:.0}%, price {:.2}/t (waste {:.2}/t)",
            name,
            factors.yield_factor,
            factors.waste_factor * 100.0,
            factors.price_per_ton,
            factors.waste_price_per_ton,
            width = max_name
        );
    }

    println!("\nLocations:\n");
    for location in store.locations() {
        println!("  {location}");
    }

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), HarvestError> {
    let store = CatalogStore::load(file)?;
    println!(
        "OK: {} crops, {} locations",
        store.crops().len(),
        store.locations().len()
    );
    Ok(())
}
