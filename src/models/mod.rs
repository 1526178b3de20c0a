mod ingredient;
mod pricing;

pub use ingredient::{IngredientUsage, StockItem};
pub use pricing::{CalculationResult, OverheadLineItem, PricingParameters};
