pub mod evaluation;
pub mod output;
pub mod scenario;
pub mod search;

pub use evaluation::{evaluate_scenario, ScenarioOutcome};
pub use output::{print_topk, write_csv};
pub use scenario::{ScenarioParams, ScenarioRanges};
pub use search::{run_sweep, SweepConfig, SweepResults};
