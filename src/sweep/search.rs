use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{IngredientUsage, OverheadLineItem, PricingParameters};
use crate::sweep::evaluation::{evaluate_scenario, ScenarioOutcome};
use crate::sweep::scenario::{ScenarioParams, ScenarioRanges};

/// Configuration for a sweep run.
pub struct SweepConfig {
    pub iterations: usize,
    pub seed: u64,
    pub ranges: ScenarioRanges,
    /// Highest price the market bears for this item, if known.
    pub price_ceiling: Option<i64>,
    pub topk: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            seed: 123,
            ranges: ScenarioRanges::default(),
            price_ceiling: None,
            topk: 10,
        }
    }
}

/// Results from a sweep run.
pub struct SweepResults {
    /// All outcomes, sorted best to worst by lexicographic comparison.
    pub outcomes: Vec<ScenarioOutcome>,
    /// The outcome for the session's current parameters.
    pub baseline: ScenarioOutcome,
}

/// Run a random-sampling sweep of the pricing-parameter space.
///
/// Deterministic for a fixed seed: the same recipe, overheads, and config
/// always produce the same ranking.
pub fn run_sweep(
    config: &SweepConfig,
    usages: &[IngredientUsage],
    overheads: &[OverheadLineItem],
    baseline_params: &PricingParameters,
) -> SweepResults {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut outcomes = Vec::with_capacity(config.iterations);

    let baseline_scenario = ScenarioParams::from_parameters(baseline_params);
    let baseline = evaluate_scenario(usages, overheads, &baseline_scenario, config.price_ceiling);

    println!(
        "Baseline: price={} profit={} food_cost={:.1}%",
        baseline.suggested_price, baseline.gross_profit, baseline.food_cost_percentage
    );
    println!("    {}\n", baseline_scenario.display());

    println!("Sampling {} scenarios...", config.iterations);

    let mut best_profit = baseline.gross_profit;

    for i in 0..config.iterations {
        let scenario = ScenarioParams::random(&mut rng, &config.ranges);
        let outcome = evaluate_scenario(usages, overheads, &scenario, config.price_ceiling);

        if outcome.sellable && outcome.gross_profit > best_profit {
            best_profit = outcome.gross_profit;
            println!(
                "[{}/{}] New best: price={} profit={} food_cost={:.1}%",
                i + 1,
                config.iterations,
                outcome.suggested_price,
                outcome.gross_profit,
                outcome.food_cost_percentage
            );
        }

        outcomes.push(outcome);

        // Progress indicator every 10%
        if (i + 1) % (config.iterations / 10).max(1) == 0 {
            let pct = ((i + 1) as f64 / config.iterations as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    // Sort outcomes by score (best first)
    outcomes.sort_by(|a, b| b.cmp_score(a));

    let sellable_count = outcomes.iter().filter(|o| o.sellable).count();
    println!(
        "\n{} of {} scenarios sellable",
        sellable_count, config.iterations
    );

    SweepResults { outcomes, baseline }
}
