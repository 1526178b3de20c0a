use assert_float_eq::assert_float_absolute_eq;

use menu_costing_rs::engine::{calculate_metrics, ingredient_cost, prime_cost};
use menu_costing_rs::models::{IngredientUsage, OverheadLineItem, PricingParameters};

fn make_usage(name: &str, unit_price: f64, quantity: f64, yield_percent: f64) -> IngredientUsage {
    IngredientUsage::new(name, unit_price, quantity, yield_percent)
}

fn standard_overheads() -> Vec<OverheadLineItem> {
    vec![
        OverheadLineItem::new("Utilities", 1500, true),
        OverheadLineItem::new("Garnish", 500, true),
        OverheadLineItem::new("Packaging", 2000, false),
    ]
}

fn standard_params() -> PricingParameters {
    PricingParameters {
        labor_cost_percent: 20.0,
        fixed_cost_buffer: 1000,
        enable_risk_factor: true,
        target_profit_margin: 30.0,
    }
}

#[test]
fn test_row_cost_at_full_yield() {
    // unitPrice=10000, qty=2, yield=100 -> 20000
    assert_eq!(ingredient_cost(10_000.0, 2.0, 100.0), 20_000);
}

#[test]
fn test_row_cost_with_yield_loss() {
    // Same row at yield=80 -> 20000 / 0.8 = 25000
    assert_eq!(ingredient_cost(10_000.0, 2.0, 80.0), 25_000);
}

#[test]
fn test_row_cost_zero_for_any_non_positive_yield() {
    for yield_percent in [0.0, -1.0, -100.0] {
        assert_eq!(ingredient_cost(10_000.0, 2.0, yield_percent), 0);
    }
}

#[test]
fn test_prime_cost_reorder_invariance() {
    let mut usages = vec![
        make_usage("A", 10.4, 1.0, 100.0),
        make_usage("B", 33.3, 2.5, 90.0),
        make_usage("C", 45.0, 120.0, 80.0),
    ];
    let forward = prime_cost(&usages);
    usages.swap(0, 2);
    assert_eq!(prime_cost(&usages), forward);
}

#[test]
fn test_prime_cost_rounds_rows_independently() {
    // Three rows of 10.5: per-row rounding gives 11 * 3 = 33, while rounding
    // the unrounded sum would give round(31.5) = 32.
    let usages = vec![
        make_usage("A", 10.5, 1.0, 100.0),
        make_usage("B", 10.5, 1.0, 100.0),
        make_usage("C", 10.5, 1.0, 100.0),
    ];
    assert_eq!(prime_cost(&usages), 33);
}

#[test]
fn test_full_pipeline_suggested_price() {
    // Prime 25000, overheads 2000, buffer 1000, risk 1250 -> component total 29250.
    // remaining = 50 -> price 58500, labor 11700, total 40950, profit 17550.
    let usages = vec![make_usage("Chicken", 10_000.0, 2.0, 80.0)];
    let result = calculate_metrics(&usages, &standard_overheads(), &standard_params(), None);

    assert_eq!(result.prime_cost, 25_000);
    assert_eq!(result.overhead_cost, 2_000);
    assert_eq!(result.fixed_cost, 1_000);
    assert_eq!(result.risk_cost, 1_250);
    assert_eq!(result.suggested_selling_price, 58_500);
    assert_eq!(result.labor_cost, 11_700);
    assert_eq!(result.total_real_cost, 40_950);
    assert_eq!(result.gross_profit, 17_550);
}

#[test]
fn test_risk_cost_zero_when_disabled() {
    let usages = vec![make_usage("Chicken", 10_000.0, 2.0, 80.0)];
    let mut params = standard_params();
    params.enable_risk_factor = false;

    let result = calculate_metrics(&usages, &standard_overheads(), &params, None);
    assert_eq!(result.risk_cost, 0);
}

#[test]
fn test_infeasible_parameters_return_sentinel_not_error() {
    let usages = vec![make_usage("Chicken", 10_000.0, 2.0, 80.0)];
    let params = PricingParameters {
        labor_cost_percent: 60.0,
        fixed_cost_buffer: 1000,
        enable_risk_factor: true,
        target_profit_margin: 50.0,
    };

    let result = calculate_metrics(&usages, &standard_overheads(), &params, None);
    assert_eq!(result.suggested_selling_price, 0);
    assert_eq!(result.labor_cost, 0);
    assert_eq!(result.gross_profit, -29_250);
    assert!(result.is_unpriceable());
}

#[test]
fn test_suggested_price_is_nonnegative_multiple_of_100() {
    let usages = vec![
        make_usage("Chicken", 45.0, 137.0, 83.0),
        make_usage("Rice", 12.3, 151.0, 100.0),
        make_usage("Oil", 23.7, 17.0, 95.0),
    ];
    let overheads = standard_overheads();

    for labor in [0.0, 5.0, 12.5, 33.0, 60.0] {
        for margin in [0.0, 10.0, 27.5, 55.0, 70.0] {
            let params = PricingParameters {
                labor_cost_percent: labor,
                fixed_cost_buffer: 777,
                enable_risk_factor: true,
                target_profit_margin: margin,
            };
            let result = calculate_metrics(&usages, &overheads, &params, None);
            assert!(result.suggested_selling_price >= 0);
            assert_eq!(
                result.suggested_selling_price % 100,
                0,
                "labor={} margin={}",
                labor,
                margin
            );
        }
    }
}

#[test]
fn test_manual_price_evaluation() {
    // Manual 50000 against component total 29250: labor 10000, profit 10750.
    let usages = vec![make_usage("Chicken", 10_000.0, 2.0, 80.0)];
    let result = calculate_metrics(
        &usages,
        &standard_overheads(),
        &standard_params(),
        Some(50_000),
    );

    assert_eq!(result.labor_cost, 10_000);
    assert_eq!(result.total_real_cost, 39_250);
    assert_eq!(result.gross_profit, 10_750);
    assert_float_absolute_eq!(result.food_cost_percentage, 50.0, 1e-9);
    assert_float_absolute_eq!(result.net_profit_percentage, 21.5, 1e-9);
}

#[test]
fn test_manual_price_does_not_touch_cost_components() {
    let usages = vec![make_usage("Chicken", 10_000.0, 2.0, 80.0)];
    let overheads = standard_overheads();
    let params = standard_params();

    let base = calculate_metrics(&usages, &overheads, &params, None);
    for manual in [10_000, 29_250, 99_999] {
        let result = calculate_metrics(&usages, &overheads, &params, Some(manual));
        assert_eq!(result.prime_cost, base.prime_cost);
        assert_eq!(result.overhead_cost, base.overhead_cost);
        assert_eq!(result.risk_cost, base.risk_cost);
        assert_eq!(result.fixed_cost, base.fixed_cost);
    }
}

#[test]
fn test_percentages_zero_at_zero_price() {
    let params = PricingParameters {
        labor_cost_percent: 50.0,
        fixed_cost_buffer: 0,
        enable_risk_factor: false,
        target_profit_margin: 50.0,
    };
    let usages = vec![make_usage("Chicken", 10_000.0, 2.0, 80.0)];
    let result = calculate_metrics(&usages, &[], &params, None);

    assert_float_absolute_eq!(result.food_cost_percentage, 0.0, 1e-12);
    assert_float_absolute_eq!(result.net_profit_percentage, 0.0, 1e-12);
}

#[test]
fn test_idempotence_bit_identical() {
    let usages = vec![
        make_usage("Chicken", 45.3, 137.0, 83.0),
        make_usage("Rice", 12.3, 151.0, 100.0),
    ];
    let overheads = standard_overheads();
    let params = standard_params();

    let a = calculate_metrics(&usages, &overheads, &params, None);
    let b = calculate_metrics(&usages, &overheads, &params, None);

    assert_eq!(a, b);
    assert_eq!(
        a.food_cost_percentage.to_bits(),
        b.food_cost_percentage.to_bits()
    );
    assert_eq!(
        a.net_profit_percentage.to_bits(),
        b.net_profit_percentage.to_bits()
    );
}
