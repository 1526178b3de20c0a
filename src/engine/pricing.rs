use crate::engine::constants::{PRICE_STEP, RISK_FACTOR_RATE};
use crate::engine::costing::{prime_cost, round_currency, selected_overhead_total};
use crate::models::{CalculationResult, IngredientUsage, OverheadLineItem, PricingParameters};

/// Labor cost carved out of a selling price at the given percentage.
fn labor_cost_at(selling_price: i64, labor_cost_percent: f64) -> i64 {
    round_currency(selling_price as f64 * labor_cost_percent / 100.0)
}

/// Round up to the next multiple of `PRICE_STEP`; prices end in whole hundreds.
fn round_up_to_price_step(amount: i64) -> i64 {
    // Equivalent to `amount.div_ceil(PRICE_STEP)` (unstable for signed ints):
    // round the quotient toward positive infinity for the positive divisor.
    let quotient = amount / PRICE_STEP;
    let remainder = amount % PRICE_STEP;
    let rounded = if remainder > 0 { quotient + 1 } else { quotient };
    rounded * PRICE_STEP
}

/// Derive the protected selling price from the fixed cost components.
///
/// `remaining_percent` is the share of revenue left after labor and target
/// margin. Non-positive means the percentages consume all revenue and no
/// price exists: the zero sentinel is returned instead of an error. The
/// price never drops below zero, so callers can rely on `0` meaning
/// "cannot price this item".
fn suggested_price(fixed_component_total: i64, remaining_percent: f64) -> i64 {
    if remaining_percent <= 0.0 {
        return 0;
    }
    let raw_price = fixed_component_total as f64 * 100.0 / remaining_percent;
    round_up_to_price_step(raw_price.ceil() as i64).max(0)
}

/// The full profit-protection pipeline: cost components, selling price,
/// profit, and display ratios from one set of inputs.
///
/// Pure and total: identical inputs give identical outputs, degenerate
/// numeric inputs are absorbed into zeroed or clamped fields, and no branch
/// panics. A `manual_price` is honored only when positive; otherwise the
/// price is derived from the target margin.
pub fn calculate_metrics(
    usages: &[IngredientUsage],
    overheads: &[OverheadLineItem],
    params: &PricingParameters,
    manual_price: Option<i64>,
) -> CalculationResult {
    let prime_cost = prime_cost(usages);
    let overhead_cost = selected_overhead_total(overheads);
    let fixed_cost = params.fixed_cost_buffer;
    let risk_cost = if params.enable_risk_factor {
        round_currency(prime_cost as f64 * RISK_FACTOR_RATE)
    } else {
        0
    };

    let fixed_component_total = prime_cost + overhead_cost + fixed_cost + risk_cost;

    let selling_price = match manual_price.filter(|&p| p > 0) {
        Some(price) => price,
        None => {
            let remaining_percent =
                100.0 - params.labor_cost_percent - params.target_profit_margin;
            suggested_price(fixed_component_total, remaining_percent)
        }
    };

    let labor_cost = labor_cost_at(selling_price, params.labor_cost_percent);
    let total_real_cost = fixed_component_total + labor_cost;
    let gross_profit = selling_price - total_real_cost;

    let (food_cost_percentage, net_profit_percentage) = if selling_price > 0 {
        (
            prime_cost as f64 / selling_price as f64 * 100.0,
            gross_profit as f64 / selling_price as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    CalculationResult {
        prime_cost,
        overhead_cost,
        risk_cost,
        fixed_cost,
        labor_cost,
        total_real_cost,
        suggested_selling_price: selling_price,
        gross_profit,
        food_cost_percentage,
        net_profit_percentage,
    }
}
