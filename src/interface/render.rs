use crate::engine::constants::{FOOD_COST_BAR_WIDTH, FOOD_COST_TARGET_PERCENT};
use crate::models::{CalculationResult, IngredientUsage, StockItem};

/// Render the food-cost ratio as a progress bar with the industry target
/// marked. The bar spans 0-100%.
pub fn food_cost_bar(food_cost_percentage: f64) -> String {
    let clamped = food_cost_percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * FOOD_COST_BAR_WIDTH as f64).round() as usize;
    let target_pos =
        ((FOOD_COST_TARGET_PERCENT / 100.0) * FOOD_COST_BAR_WIDTH as f64).round() as usize;

    let mut bar = String::with_capacity(FOOD_COST_BAR_WIDTH + 2);
    for i in 0..FOOD_COST_BAR_WIDTH {
        if i == target_pos {
            bar.push('|');
        } else if i < filled {
            bar.push('#');
        } else {
            bar.push('-');
        }
    }

    let verdict = if food_cost_percentage <= FOOD_COST_TARGET_PERCENT {
        "ok"
    } else {
        "high"
    };

    format!("[{}] {:.1}% ({})", bar, food_cost_percentage, verdict)
}

/// Display a full cost breakdown.
pub fn display_breakdown(result: &CalculationResult, manual_price: Option<i64>) {
    println!();
    println!("=== Cost Breakdown ===");
    println!();

    println!("  {:<22} {:>12}", "Prime cost", result.prime_cost);
    println!("  {:<22} {:>12}", "Overhead", result.overhead_cost);
    println!("  {:<22} {:>12}", "Fixed buffer", result.fixed_cost);
    println!("  {:<22} {:>12}", "Risk allowance", result.risk_cost);
    println!("  {:<22} {:>12}", "Labor", result.labor_cost);
    println!("  {:<22} {:>12}", "Total real cost", result.total_real_cost);
    println!();

    if result.is_unpriceable() {
        println!("  Cannot price this item: labor % plus target margin");
        println!("  consume the whole selling price. Lower one of them.");
        println!();
        return;
    }

    let price_label = if manual_price.is_some() {
        "Manual price"
    } else {
        "Suggested price"
    };
    println!(
        "  {:<22} {:>12}",
        price_label, result.suggested_selling_price
    );

    let profit_sign = if result.gross_profit >= 0 { "" } else { "-" };
    println!(
        "  {:<22} {}{:>11}",
        "Gross profit",
        profit_sign,
        result.gross_profit.abs()
    );
    println!();

    println!("  Food cost  {}", food_cost_bar(result.food_cost_percentage));
    println!("  Net profit {:.1}% of selling price", result.net_profit_percentage);
    println!();
}

/// Display the recipe rows with their positions.
pub fn display_recipe(recipe: &[IngredientUsage]) {
    if recipe.is_empty() {
        println!("Recipe is empty.");
        return;
    }

    println!();
    println!("=== Recipe ({} rows) ===", recipe.len());
    println!();

    let max_name_len = recipe.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for (i, row) in recipe.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>8.1} @ {:>8.2}, yield {:>5.1}%",
            i + 1,
            row.name,
            row.quantity_needed,
            row.unit_price,
            row.yield_percent,
            width = max_name_len
        );
    }

    println!();
}

/// Display a simple list of stock items.
pub fn display_catalog(items: &[&StockItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        println!("  {} - {} per {}", item.name, item.unit_price, item.unit);
    }

    println!();
}
