use serde::{Deserialize, Serialize};

/// A catalog entry for a purchasable stock item.
///
/// `unit_price` is the default price per base unit (per gram, per ml, per
/// piece); recipe rows may override it per scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,

    /// Measurement unit of the base quantity ("g", "ml", "pcs", ...).
    pub unit: String,

    pub unit_price: f64,
}

impl StockItem {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: a named item with a non-negative price.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.unit_price >= 0.0
    }
}

impl PartialEq for StockItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for StockItem {}

/// One row of a recipe: how much of a stock item a single portion consumes.
///
/// The costing engine reads only the three numeric fields; `name` exists for
/// display and catalog lookups. Values are deliberately not clamped — a yield
/// of 150 or a negative quantity passes through arithmetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsage {
    pub name: String,

    /// Price per base unit, catalog default or a scenario override.
    pub unit_price: f64,

    /// Quantity consumed per portion, in the stock item's unit.
    pub quantity_needed: f64,

    /// Usable-yield percentage after trimming and cooking loss.
    pub yield_percent: f64,
}

impl IngredientUsage {
    pub fn new(name: &str, unit_price: f64, quantity_needed: f64, yield_percent: f64) -> Self {
        Self {
            name: name.to_string(),
            unit_price,
            quantity_needed,
            yield_percent,
        }
    }

    /// Fraction of the prepared quantity that survives prep.
    #[inline]
    pub fn yield_factor(&self) -> f64 {
        self.yield_percent / 100.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} @ {} (yield {}%)",
            self.name, self.quantity_needed, self.unit_price, self.yield_percent
        )
    }
}
