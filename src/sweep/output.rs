use std::path::Path;

use crate::error::Result;
use crate::sweep::evaluation::ScenarioOutcome;

/// Write all outcomes to a CSV file, best first.
pub fn write_csv(outcomes: &[ScenarioOutcome], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "labor_cost_percent",
        "target_profit_margin",
        "fixed_cost_buffer",
        "risk_factor",
        "suggested_price",
        "gross_profit",
        "food_cost_percent",
        "net_profit_percent",
        "sellable",
    ])?;

    for (i, outcome) in outcomes.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            format!("{:.1}", outcome.scenario.labor_cost_percent),
            format!("{:.1}", outcome.scenario.target_profit_margin),
            outcome.scenario.fixed_cost_buffer.to_string(),
            outcome.scenario.enable_risk_factor.to_string(),
            outcome.suggested_price.to_string(),
            outcome.gross_profit.to_string(),
            format!("{:.1}", outcome.food_cost_percentage),
            format!("{:.1}", outcome.net_profit_percentage),
            outcome.sellable.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print top-k outcomes to stdout.
pub fn print_topk(outcomes: &[ScenarioOutcome], k: usize) {
    println!("\n=== Top {} Scenarios ===\n", k.min(outcomes.len()));

    for (i, outcome) in outcomes.iter().take(k).enumerate() {
        let tag = if !outcome.feasible {
            " [cannot price]"
        } else if !outcome.sellable {
            " [over ceiling]"
        } else {
            ""
        };

        println!(
            "#{}: price={} profit={} food_cost={:.1}% net={:.1}%{}",
            i + 1,
            outcome.suggested_price,
            outcome.gross_profit,
            outcome.food_cost_percentage,
            outcome.net_profit_percentage,
            tag
        );
        println!("    {}", outcome.scenario.display());
        println!();
    }
}
