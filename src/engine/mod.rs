pub mod constants;
pub mod costing;
pub mod pricing;

pub use constants::*;
pub use costing::{ingredient_cost, prime_cost, round_currency, selected_overhead_total};
pub use pricing::calculate_metrics;
