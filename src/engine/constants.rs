use crate::models::OverheadLineItem;

/// Waste/risk allowance as a fraction of prime cost.
pub const RISK_FACTOR_RATE: f64 = 0.05;

/// Selling prices are rounded up to whole hundreds.
pub const PRICE_STEP: i64 = 100;

/// Industry guideline: food cost at or below this share of the selling price
/// is considered healthy. Display-only.
pub const FOOD_COST_TARGET_PERCENT: f64 = 35.0;

/// Width of the food-cost progress bar, in characters.
pub const FOOD_COST_BAR_WIDTH: usize = 30;

/// Canonical starting set of overhead line items.
///
/// Callers may add, remove, or toggle freely; this is only the default
/// configuration for a fresh session.
pub fn default_overheads() -> Vec<OverheadLineItem> {
    vec![
        OverheadLineItem::new("Utilities (gas & electric)", 1500, true),
        OverheadLineItem::new("Packaging", 2000, true),
        OverheadLineItem::new("Garnish", 500, false),
        OverheadLineItem::new("Cleaning supplies", 1000, false),
    ]
}
