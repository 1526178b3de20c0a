use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::PricingParameters;

/// One candidate pricing configuration for the sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub labor_cost_percent: f64,
    pub target_profit_margin: f64,
    pub fixed_cost_buffer: i64,
    pub enable_risk_factor: bool,
}

impl ScenarioParams {
    /// Sample a scenario uniformly within the given ranges.
    pub fn random(rng: &mut impl Rng, ranges: &ScenarioRanges) -> Self {
        Self {
            labor_cost_percent: rng
                .gen_range(ranges.labor_cost_percent.0..=ranges.labor_cost_percent.1),
            target_profit_margin: rng
                .gen_range(ranges.target_profit_margin.0..=ranges.target_profit_margin.1),
            fixed_cost_buffer: rng
                .gen_range(ranges.fixed_cost_buffer.0..=ranges.fixed_cost_buffer.1),
            enable_risk_factor: rng.gen_bool(ranges.risk_probability),
        }
    }

    /// Snapshot of an existing parameter set, for the baseline row.
    pub fn from_parameters(params: &PricingParameters) -> Self {
        Self {
            labor_cost_percent: params.labor_cost_percent,
            target_profit_margin: params.target_profit_margin,
            fixed_cost_buffer: params.fixed_cost_buffer,
            enable_risk_factor: params.enable_risk_factor,
        }
    }

    /// Convert into the engine's parameter type.
    pub fn to_parameters(&self) -> PricingParameters {
        PricingParameters {
            labor_cost_percent: self.labor_cost_percent,
            fixed_cost_buffer: self.fixed_cost_buffer,
            enable_risk_factor: self.enable_risk_factor,
            target_profit_margin: self.target_profit_margin,
        }
    }

    /// Format as a compact string for display.
    pub fn display(&self) -> String {
        format!(
            "labor={:.1}% margin={:.1}% buffer={} risk={}",
            self.labor_cost_percent,
            self.target_profit_margin,
            self.fixed_cost_buffer,
            if self.enable_risk_factor { "on" } else { "off" }
        )
    }
}

/// Sampling bounds for each scenario dimension.
#[derive(Debug, Clone)]
pub struct ScenarioRanges {
    /// (min, max) labor percentage of selling price.
    pub labor_cost_percent: (f64, f64),
    /// (min, max) target profit margin percentage.
    pub target_profit_margin: (f64, f64),
    /// (min, max) flat buffer per portion.
    pub fixed_cost_buffer: (i64, i64),
    /// Probability that a sampled scenario enables the risk factor.
    pub risk_probability: f64,
}

impl Default for ScenarioRanges {
    fn default() -> Self {
        Self {
            labor_cost_percent: (5.0, 25.0),
            target_profit_margin: (10.0, 60.0),
            fixed_cost_buffer: (0, 2000),
            risk_probability: 0.5,
        }
    }
}
