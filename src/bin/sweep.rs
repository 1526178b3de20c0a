use std::path::PathBuf;

use clap::Parser;

use menu_costing_rs::state::load_session;
use menu_costing_rs::sweep::{print_topk, run_sweep, write_csv, ScenarioRanges, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Pricing scenario explorer for the menu costing engine")]
struct Args {
    /// Number of random scenarios to sample
    #[arg(long, default_value = "200")]
    iters: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Path to the costing session JSON file
    #[arg(long, default_value = "costing_session.json")]
    session: PathBuf,

    /// Output CSV file for all scenarios
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Number of top scenarios to display
    #[arg(long, default_value = "10")]
    topk: usize,

    /// Highest price the market bears; scenarios above it rank as unsellable
    #[arg(long)]
    ceiling: Option<i64>,
}

fn main() {
    let args = Args::parse();

    let session = match load_session(&args.session) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading session {:?}: {}", args.session, e);
            std::process::exit(1);
        }
    };

    if session.recipe().is_empty() {
        eprintln!("Session has no recipe rows; nothing to sweep.");
        std::process::exit(1);
    }

    println!(
        "Loaded session: {} recipe rows, {} overhead items",
        session.recipe().len(),
        session.overheads().len()
    );
    if let Some(ceiling) = args.ceiling {
        println!("Price ceiling: {}", ceiling);
    }

    let config = SweepConfig {
        iterations: args.iters,
        seed: args.seed,
        ranges: ScenarioRanges::default(),
        price_ceiling: args.ceiling,
        topk: args.topk,
    };

    let results = run_sweep(
        &config,
        session.recipe(),
        session.overheads(),
        session.parameters(),
    );

    print_topk(&results.outcomes, args.topk);

    // Compare best sellable scenario to the session baseline
    if let Some(best) = results.outcomes.iter().find(|o| o.sellable) {
        let baseline = &results.baseline;
        println!("=== Comparison: Best vs Baseline ===");
        println!(
            "Baseline: price={} profit={} food_cost={:.1}%",
            baseline.suggested_price, baseline.gross_profit, baseline.food_cost_percentage
        );
        println!(
            "Best:     price={} profit={} food_cost={:.1}%",
            best.suggested_price, best.gross_profit, best.food_cost_percentage
        );
        println!(
            "Change:   profit {:+}  food_cost {:+.1} pp",
            best.gross_profit - baseline.gross_profit,
            best.food_cost_percentage - baseline.food_cost_percentage
        );
        println!();
    } else {
        println!("No sellable scenario found. Raise the ceiling or widen the ranges.");
    }

    if let Err(e) = write_csv(&results.outcomes, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all scenarios to {:?}", args.csv);
    }
}
