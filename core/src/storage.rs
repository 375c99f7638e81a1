use anyhow::Context;
use log::{info, warn};
use std::path::Path;

use crate::errors::from_json_str;
use crate::reference::ReferenceData;

/// Leser inn normdata fra disk (JSON) og validerer dem.
/// Hvis filen ikke finnes, returneres de innebygde dataene.
pub fn load_reference_data(path: impl AsRef<Path>) -> anyhow::Result<ReferenceData> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("reference data not found at {}, using built-in tables", path.display());
        return Ok(ReferenceData::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading reference data from {}", path.display()))?;
    let data: ReferenceData = from_json_str(&contents)
        .with_context(|| format!("parsing reference data in {}", path.display()))?;
    data.validate()
        .with_context(|| format!("validating reference data in {}", path.display()))?;

    info!(
        "reference data loaded from {} ({} tests, {} sports)",
        path.display(),
        data.benchmarks.len(),
        data.sports.len()
    );
    Ok(data)
}

/// Lagrer normdata til disk som JSON (pretty-print).
pub fn save_reference_data(data: &ReferenceData, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json).with_context(|| format!("writing reference data to {}", path.display()))?;
    info!("reference data saved to {}", path.display());
    Ok(())
}
