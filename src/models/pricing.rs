use serde::{Deserialize, Serialize};

/// A fixed add-on cost (utilities, packaging, garnish) that contributes its
/// `amount` to the portion cost when selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverheadLineItem {
    pub label: String,

    /// Currency value added per portion when selected.
    pub amount: i64,

    pub is_selected: bool,
}

impl OverheadLineItem {
    pub fn new(label: &str, amount: i64, is_selected: bool) -> Self {
        Self {
            label: label.to_string(),
            amount,
            is_selected,
        }
    }
}

/// Business parameters for the pricing formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Percentage of the selling price attributed to labor.
    pub labor_cost_percent: f64,

    /// Flat currency amount added per portion regardless of ingredients.
    pub fixed_cost_buffer: i64,

    /// When true, a waste allowance of 5% of prime cost is added.
    pub enable_risk_factor: bool,

    /// Desired percentage of the selling price retained as profit. Used only
    /// when no manual price is supplied.
    pub target_profit_margin: f64,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            labor_cost_percent: 10.0,
            fixed_cost_buffer: 500,
            enable_risk_factor: true,
            target_profit_margin: 30.0,
        }
    }
}

/// The fully derived output of one costing run. Immutable once produced.
///
/// Invariant: `total_real_cost = prime_cost + overhead_cost + fixed_cost +
/// risk_cost + labor_cost`, and `gross_profit = suggested_selling_price -
/// total_real_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Total ingredient cost for one portion.
    pub prime_cost: i64,

    /// Sum of the selected overhead line items.
    pub overhead_cost: i64,

    /// Waste allowance: 5% of prime cost when the risk factor is enabled.
    pub risk_cost: i64,

    /// The flat per-portion buffer, verbatim from the parameters.
    pub fixed_cost: i64,

    pub labor_cost: i64,

    pub total_real_cost: i64,

    /// The effective selling price: the caller's manual price when one was
    /// supplied, otherwise the derived price. `0` is the sentinel for
    /// "cannot price this item" (infeasible parameters).
    pub suggested_selling_price: i64,

    /// Selling price minus total real cost. May be negative.
    pub gross_profit: i64,

    /// Prime cost as a share of the selling price, in percent. `0.0` when
    /// the selling price is zero. Unrounded; display with one decimal.
    pub food_cost_percentage: f64,

    /// Gross profit as a share of the selling price, in percent.
    pub net_profit_percentage: f64,
}

impl CalculationResult {
    /// Whether the parameters admitted no price (labor plus target margin
    /// consumed the whole revenue).
    #[inline]
    pub fn is_unpriceable(&self) -> bool {
        self.suggested_selling_price == 0
    }
}
