use crate::models::{IngredientUsage, OverheadLineItem};

/// Round a currency value to the nearest integer unit, ties away from zero.
///
/// `f64::round` carries exactly these semantics; the alias keeps the rounding
/// policy visible at call sites, since every intermediate currency amount in
/// the pipeline goes through it.
#[inline]
pub fn round_currency(value: f64) -> i64 {
    value.round() as i64
}

/// Cost of one ingredient row, accounting for yield loss.
///
/// A non-positive yield forces the row to `0` rather than dividing by zero;
/// the ingredient's contribution is silently discarded. Out-of-range values
/// (yield above 100, negative quantity) pass through arithmetically.
pub fn ingredient_cost(unit_price: f64, quantity_needed: f64, yield_percent: f64) -> i64 {
    let yield_factor = yield_percent / 100.0;
    if yield_factor <= 0.0 {
        return 0;
    }
    round_currency(unit_price * quantity_needed / yield_factor)
}

/// Total ingredient cost for one portion: the sum of per-row costs.
///
/// Each row is rounded independently before summation, so the total is
/// invariant under reordering but not equal to rounding the unrounded sum.
pub fn prime_cost(usages: &[IngredientUsage]) -> i64 {
    usages
        .iter()
        .map(|u| ingredient_cost(u.unit_price, u.quantity_needed, u.yield_percent))
        .sum()
}

/// Sum of the overhead line items the caller has selected.
pub fn selected_overhead_total(overheads: &[OverheadLineItem]) -> i64 {
    overheads
        .iter()
        .filter(|item| item.is_selected)
        .map(|item| item.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_yield_is_plain_product() {
        assert_eq!(ingredient_cost(10_000.0, 2.0, 100.0), 20_000);
    }

    #[test]
    fn test_yield_loss_inflates_cost() {
        // 20000 / 0.8
        assert_eq!(ingredient_cost(10_000.0, 2.0, 80.0), 25_000);
    }

    #[test]
    fn test_non_positive_yield_clamps_to_zero() {
        assert_eq!(ingredient_cost(10_000.0, 2.0, 0.0), 0);
        assert_eq!(ingredient_cost(10_000.0, 2.0, -40.0), 0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 25 * 0.5 = 12.5 -> 13
        assert_eq!(ingredient_cost(25.0, 0.5, 100.0), 13);
        // Negative quantity follows the sign: -12.5 -> -13
        assert_eq!(ingredient_cost(25.0, -0.5, 100.0), -13);
    }

    #[test]
    fn test_overlarge_yield_deflates_cost() {
        // Permissive input policy: 150% yield divides the cost down.
        assert_eq!(ingredient_cost(3_000.0, 1.0, 150.0), 2_000);
    }

    #[test]
    fn test_prime_cost_empty() {
        assert_eq!(prime_cost(&[]), 0);
    }

    #[test]
    fn test_prime_cost_order_invariant() {
        let mut usages = vec![
            IngredientUsage::new("Rice", 12.0, 150.0, 100.0),
            IngredientUsage::new("Chicken", 45.0, 120.0, 80.0),
            IngredientUsage::new("Oil", 23.5, 15.0, 95.0),
        ];
        let forward = prime_cost(&usages);
        usages.reverse();
        assert_eq!(prime_cost(&usages), forward);
    }

    #[test]
    fn test_prime_cost_rounds_per_row() {
        // Two rows of 10.4 each: rounded per row (10 + 10 = 20), not as a
        // rounded sum (20.8 -> 21).
        let usages = vec![
            IngredientUsage::new("A", 10.4, 1.0, 100.0),
            IngredientUsage::new("B", 10.4, 1.0, 100.0),
        ];
        assert_eq!(prime_cost(&usages), 20);
    }

    #[test]
    fn test_selected_overhead_total() {
        let overheads = vec![
            OverheadLineItem::new("Utilities", 1500, true),
            OverheadLineItem::new("Packaging", 2000, false),
            OverheadLineItem::new("Garnish", 500, true),
        ];
        assert_eq!(selected_overhead_total(&overheads), 2000);
    }

    #[test]
    fn test_selected_overhead_total_none_selected() {
        let overheads = vec![OverheadLineItem::new("Utilities", 1500, false)];
        assert_eq!(selected_overhead_total(&overheads), 0);
    }
}
