use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::constants::default_overheads;
use crate::error::Result;
use crate::models::{IngredientUsage, OverheadLineItem, PricingParameters, StockItem};
use crate::state::CostingSession;

/// On-disk shape of a costing session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionFile {
    pub catalog: Vec<StockItem>,

    #[serde(default)]
    pub recipe: Vec<IngredientUsage>,

    #[serde(default)]
    pub overheads: Vec<OverheadLineItem>,

    #[serde(default)]
    pub params: Option<PricingParameters>,

    #[serde(default)]
    pub manual_price: Option<i64>,
}

/// Load a session from a JSON file.
///
/// Catalog entries are deduplicated by lowercase name (last occurrence
/// wins). A file missing overheads or parameters falls back to defaults.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<CostingSession> {
    let content = fs::read_to_string(path)?;
    let file: SessionFile = serde_json::from_str(&content)?;

    // Deduplicate by lowercase name, keeping last occurrence
    let mut seen: HashMap<String, StockItem> = HashMap::new();
    for item in file.catalog {
        seen.insert(item.key(), item);
    }

    let overheads = if file.overheads.is_empty() {
        default_overheads()
    } else {
        file.overheads
    };

    Ok(CostingSession::from_parts(
        seen.into_values().collect(),
        file.recipe,
        overheads,
        file.params.unwrap_or_default(),
        file.manual_price,
    ))
}

/// Save a session to a JSON file.
pub fn save_session<P: AsRef<Path>>(path: P, session: &CostingSession) -> Result<()> {
    let file = SessionFile {
        catalog: session.to_catalog(),
        recipe: session.recipe().to_vec(),
        overheads: session.overheads().to_vec(),
        params: Some(session.parameters().clone()),
        manual_price: session.manual_price(),
    };

    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}

/// Import stock items from a CSV file with `name,unit,unit_price` columns.
///
/// Invalid rows (unnamed items, negative prices) are skipped; the caller
/// decides how to report the count.
pub fn import_catalog_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<StockItem>, usize)> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    let mut skipped = 0;

    for record in reader.deserialize() {
        let item: StockItem = match record {
            Ok(item) => item,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if item.is_valid() {
            items.push(item);
        } else {
            skipped += 1;
        }
    }

    Ok((items, skipped))
}
