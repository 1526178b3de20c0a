use std::collections::HashMap;

use crate::engine::constants::default_overheads;
use crate::engine::pricing::calculate_metrics;
use crate::error::{CostingError, Result};
use crate::models::{
    CalculationResult, IngredientUsage, OverheadLineItem, PricingParameters, StockItem,
};

/// Caller-side store for one costing workflow: the stock catalog, the recipe
/// under edit, the overhead toggles, and the pricing parameters.
///
/// The engine itself is stateless; the session just hands it the current
/// inputs on each `calculate` call.
pub struct CostingSession {
    /// Catalog keyed by lowercase name.
    catalog: HashMap<String, StockItem>,

    recipe: Vec<IngredientUsage>,

    overheads: Vec<OverheadLineItem>,

    params: PricingParameters,

    /// A positive manual price switches the engine to evaluation mode.
    manual_price: Option<i64>,
}

impl CostingSession {
    /// Create a fresh session around a catalog, with the default overhead
    /// set and default parameters.
    pub fn new(catalog_items: Vec<StockItem>) -> Self {
        let mut catalog = HashMap::new();
        for item in catalog_items {
            catalog.insert(item.key(), item);
        }
        Self {
            catalog,
            recipe: Vec::new(),
            overheads: default_overheads(),
            params: PricingParameters::default(),
            manual_price: None,
        }
    }

    /// Rebuild a session from persisted parts.
    pub fn from_parts(
        catalog_items: Vec<StockItem>,
        recipe: Vec<IngredientUsage>,
        overheads: Vec<OverheadLineItem>,
        params: PricingParameters,
        manual_price: Option<i64>,
    ) -> Self {
        let mut session = Self::new(catalog_items);
        session.recipe = recipe;
        session.overheads = overheads;
        session.params = params;
        session.manual_price = manual_price;
        session
    }

    /// Get a stock item by name (case-insensitive).
    pub fn get_stock_item(&self, name: &str) -> Option<&StockItem> {
        self.catalog.get(&name.to_lowercase())
    }

    /// Insert or replace a catalog entry.
    pub fn upsert_stock_item(&mut self, item: StockItem) {
        self.catalog.insert(item.key(), item);
    }

    /// All catalog entries.
    pub fn catalog_items(&self) -> Vec<&StockItem> {
        self.catalog.values().collect()
    }

    /// Add a recipe row for a catalog item. The catalog's unit price applies
    /// unless `price_override` is given.
    pub fn add_usage(
        &mut self,
        name: &str,
        quantity_needed: f64,
        yield_percent: f64,
        price_override: Option<f64>,
    ) -> Result<()> {
        let item = self
            .get_stock_item(name)
            .ok_or_else(|| CostingError::StockItemNotFound(name.to_string()))?;

        let unit_price = price_override.unwrap_or(item.unit_price);
        self.recipe.push(IngredientUsage::new(
            &item.name,
            unit_price,
            quantity_needed,
            yield_percent,
        ));
        Ok(())
    }

    /// Remove a recipe row by position.
    pub fn remove_usage(&mut self, index: usize) -> Option<IngredientUsage> {
        if index < self.recipe.len() {
            Some(self.recipe.remove(index))
        } else {
            None
        }
    }

    pub fn recipe(&self) -> &[IngredientUsage] {
        &self.recipe
    }

    pub fn overheads(&self) -> &[OverheadLineItem] {
        &self.overheads
    }

    /// Toggle one overhead line item by label (case-insensitive).
    pub fn toggle_overhead(&mut self, label: &str) -> bool {
        for item in &mut self.overheads {
            if item.label.to_lowercase() == label.to_lowercase() {
                item.is_selected = !item.is_selected;
                return true;
            }
        }
        false
    }

    /// Replace the selection state wholesale: items at the given positions
    /// become selected, all others deselected.
    pub fn set_overhead_selection(&mut self, selected: &[usize]) {
        for (i, item) in self.overheads.iter_mut().enumerate() {
            item.is_selected = selected.contains(&i);
        }
    }

    /// Append a custom overhead line item.
    pub fn add_overhead(&mut self, item: OverheadLineItem) {
        self.overheads.push(item);
    }

    pub fn parameters(&self) -> &PricingParameters {
        &self.params
    }

    pub fn set_parameters(&mut self, params: PricingParameters) {
        self.params = params;
    }

    pub fn manual_price(&self) -> Option<i64> {
        self.manual_price
    }

    pub fn set_manual_price(&mut self, price: Option<i64>) {
        self.manual_price = price;
    }

    /// Run the costing engine over the session's current inputs.
    pub fn calculate(&self) -> CalculationResult {
        calculate_metrics(&self.recipe, &self.overheads, &self.params, self.manual_price)
    }

    /// Drop all recipe rows and any manual price.
    pub fn reset_recipe(&mut self) {
        self.recipe.clear();
        self.manual_price = None;
    }

    /// Restore the canonical overhead set.
    pub fn reset_overheads(&mut self) {
        self.overheads = default_overheads();
    }

    /// Restore default pricing parameters.
    pub fn reset_parameters(&mut self) {
        self.params = PricingParameters::default();
    }

    /// Convert the catalog to a list for serialization.
    pub fn to_catalog(&self) -> Vec<StockItem> {
        self.catalog.values().cloned().collect()
    }

    /// Count of catalog entries.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<StockItem> {
        vec![
            StockItem {
                name: "Chicken Breast".to_string(),
                unit: "g".to_string(),
                unit_price: 45.0,
            },
            StockItem {
                name: "Rice".to_string(),
                unit: "g".to_string(),
                unit_price: 12.0,
            },
        ]
    }

    #[test]
    fn test_get_stock_item_case_insensitive() {
        let session = CostingSession::new(sample_catalog());
        assert!(session.get_stock_item("rice").is_some());
        assert!(session.get_stock_item("RICE").is_some());
        assert!(session.get_stock_item("Rice").is_some());
        assert!(session.get_stock_item("tofu").is_none());
    }

    #[test]
    fn test_add_usage_uses_catalog_price() {
        let mut session = CostingSession::new(sample_catalog());
        session.add_usage("rice", 150.0, 100.0, None).unwrap();

        let row = &session.recipe()[0];
        assert_eq!(row.name, "Rice");
        assert_eq!(row.unit_price, 12.0);
    }

    #[test]
    fn test_add_usage_price_override() {
        let mut session = CostingSession::new(sample_catalog());
        session
            .add_usage("chicken breast", 120.0, 80.0, Some(52.5))
            .unwrap();

        assert_eq!(session.recipe()[0].unit_price, 52.5);
    }

    #[test]
    fn test_add_usage_unknown_item() {
        let mut session = CostingSession::new(sample_catalog());
        let result = session.add_usage("tofu", 100.0, 100.0, None);
        assert!(matches!(result, Err(CostingError::StockItemNotFound(_))));
    }

    #[test]
    fn test_toggle_overhead() {
        let mut session = CostingSession::new(sample_catalog());
        let before = session.overheads()[0].is_selected;

        assert!(session.toggle_overhead("utilities (gas & electric)"));
        assert_eq!(session.overheads()[0].is_selected, !before);
        assert!(!session.toggle_overhead("no such line"));
    }

    #[test]
    fn test_set_overhead_selection() {
        let mut session = CostingSession::new(sample_catalog());
        session.set_overhead_selection(&[2]);

        let selected: Vec<bool> = session.overheads().iter().map(|o| o.is_selected).collect();
        assert_eq!(selected, vec![false, false, true, false]);
    }

    #[test]
    fn test_calculate_passes_session_inputs_through() {
        let mut session = CostingSession::new(sample_catalog());
        session.add_usage("rice", 150.0, 100.0, None).unwrap();
        session.set_overhead_selection(&[]);
        session.set_parameters(PricingParameters {
            labor_cost_percent: 0.0,
            fixed_cost_buffer: 0,
            enable_risk_factor: false,
            target_profit_margin: 10.0,
        });

        let result = session.calculate();
        assert_eq!(result.prime_cost, 1_800);
        // 1800 * 100 / 90 = 2000
        assert_eq!(result.suggested_selling_price, 2_000);
    }

    #[test]
    fn test_reset_recipe_clears_manual_price() {
        let mut session = CostingSession::new(sample_catalog());
        session.add_usage("rice", 100.0, 100.0, None).unwrap();
        session.set_manual_price(Some(15_000));

        session.reset_recipe();
        assert!(session.recipe().is_empty());
        assert!(session.manual_price().is_none());
    }
}
