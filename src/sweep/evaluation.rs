use crate::engine::pricing::calculate_metrics;
use crate::models::{IngredientUsage, OverheadLineItem};
use crate::sweep::scenario::ScenarioParams;

/// Outcome of pricing one scenario against a fixed recipe.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario: ScenarioParams,
    pub suggested_price: i64,
    pub gross_profit: i64,
    pub food_cost_percentage: f64,
    pub net_profit_percentage: f64,

    /// The percentages left room for a price at all.
    pub feasible: bool,

    /// Feasible and at or under the price ceiling, when one is set.
    pub sellable: bool,
}

impl ScenarioOutcome {
    /// Lexicographic comparison: sellable first, then higher gross profit,
    /// then lower food-cost percentage. Greater is better.
    pub fn cmp_score(&self, other: &Self) -> std::cmp::Ordering {
        match self.sellable.cmp(&other.sellable) {
            std::cmp::Ordering::Equal => {}
            ord => return ord,
        }
        match self.gross_profit.cmp(&other.gross_profit) {
            std::cmp::Ordering::Equal => {}
            ord => return ord,
        }
        // Lower food cost wins, so flip the comparison
        other
            .food_cost_percentage
            .partial_cmp(&self.food_cost_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Price one scenario with the engine and classify the result.
pub fn evaluate_scenario(
    usages: &[IngredientUsage],
    overheads: &[OverheadLineItem],
    scenario: &ScenarioParams,
    price_ceiling: Option<i64>,
) -> ScenarioOutcome {
    let params = scenario.to_parameters();
    let result = calculate_metrics(usages, overheads, &params, None);

    let feasible = result.suggested_selling_price > 0;
    let sellable = feasible
        && price_ceiling
            .map(|ceiling| result.suggested_selling_price <= ceiling)
            .unwrap_or(true);

    ScenarioOutcome {
        scenario: scenario.clone(),
        suggested_price: result.suggested_selling_price,
        gross_profit: result.gross_profit,
        food_cost_percentage: result.food_cost_percentage,
        net_profit_percentage: result.net_profit_percentage,
        feasible,
        sellable,
    }
}
