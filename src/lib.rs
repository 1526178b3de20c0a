pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod sweep;

pub use error::{CostingError, Result};
pub use models::{CalculationResult, IngredientUsage, OverheadLineItem, PricingParameters};
