//! Catalog loading from JSON source files.
//!
//! Loading happens once, synchronously, before a service starts
//! accepting requests. The deployment-facing [`load_or_empty`] trades
//! correctness for availability: a missing or malformed source yields
//! an empty catalog rather than a crash, and the service answers
//! empty results from then on.

use crate::{Catalog, LoadError, Record};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a catalog from a UTF-8 JSON array of record objects.
pub fn load<R>(path: &Path) -> Result<Catalog<R>, LoadError>
where
    R: Record + DeserializeOwned,
{
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<R> = serde_json::from_str(&raw)?;
    let catalog = Catalog::new(records);

    tracing::info!(
        "loaded {} records ({} category keys) from {}",
        catalog.len(),
        catalog.category_keys(),
        path.display()
    );

    Ok(catalog)
}

/// Load a catalog, degrading to empty on any failure.
///
/// The failure is logged but never surfaced to callers; lookups
/// against the empty catalog answer with absent/empty results, so
/// callers cannot distinguish "no data" from "load failed".
pub fn load_or_empty<R>(path: &Path) -> Catalog<R>
where
    R: Record + DeserializeOwned,
{
    match load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("error loading {}: {e}", path.display());
            Catalog::default()
        }
    }
}
