use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{CostingError, Result};
use crate::models::{OverheadLineItem, PricingParameters, StockItem};

fn parse_number<T: std::str::FromStr>(input: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| CostingError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for a stock item name, resolving against the catalog.
///
/// Exact match first (case-insensitive), then fuzzy matching with a
/// confirm/select flow. Returns `None` when the user enters an empty line.
pub fn prompt_stock_item(catalog: &[&StockItem]) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive)
        let exact_match = catalog
            .iter()
            .find(|item| item.name.to_lowercase() == input.to_lowercase());

        if let Some(item) = exact_match {
            return Ok(Some(item.name.clone()));
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&StockItem, f64)> = catalog
            .iter()
            .map(|item| {
                (
                    *item,
                    jaro_winkler(&item.name.to_lowercase(), &input.to_lowercase()),
                )
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching stock item for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let item = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", item.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(item.name.clone()));
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(item, _)| item.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                return Ok(Some(options[selection].clone()));
            }
        }
    }
}

/// Prompt for the quantity, yield, and optional price override of one row.
pub fn prompt_usage_details(item: &StockItem) -> Result<(f64, f64, Option<f64>)> {
    let quantity: String = Input::new()
        .with_prompt(format!("Quantity needed ({})", item.unit))
        .interact_text()?;
    let quantity: f64 = parse_number(&quantity)?;

    let yield_percent: String = Input::new()
        .with_prompt("Usable yield %")
        .default("100".to_string())
        .interact_text()?;
    let yield_percent: f64 = parse_number(&yield_percent)?;

    let price: String = Input::new()
        .with_prompt(format!("Unit price (Enter for catalog {})", item.unit_price))
        .allow_empty(true)
        .interact_text()?;

    let override_price = if price.trim().is_empty() {
        None
    } else {
        Some(parse_number(&price)?)
    };

    Ok((quantity, yield_percent, override_price))
}

/// Prompt for the overhead selection; returns the checked positions.
pub fn prompt_overhead_selection(overheads: &[OverheadLineItem]) -> Result<Vec<usize>> {
    let labels: Vec<String> = overheads
        .iter()
        .map(|item| format!("{} ({})", item.label, item.amount))
        .collect();
    let defaults: Vec<bool> = overheads.iter().map(|item| item.is_selected).collect();

    let selection = MultiSelect::new()
        .with_prompt("Overhead line items (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(selection)
}

/// Prompt for the four pricing parameters, defaulting to the current values.
pub fn prompt_parameters(current: &PricingParameters) -> Result<PricingParameters> {
    let labor: String = Input::new()
        .with_prompt("Labor cost % of selling price")
        .default(current.labor_cost_percent.to_string())
        .interact_text()?;
    let labor_cost_percent: f64 = parse_number(&labor)?;

    let buffer: String = Input::new()
        .with_prompt("Fixed cost buffer per portion")
        .default(current.fixed_cost_buffer.to_string())
        .interact_text()?;
    let fixed_cost_buffer: i64 = parse_number(&buffer)?;

    let enable_risk_factor = Confirm::new()
        .with_prompt("Add 5% waste/risk allowance?")
        .default(current.enable_risk_factor)
        .interact()?;

    let margin: String = Input::new()
        .with_prompt("Target profit margin %")
        .default(current.target_profit_margin.to_string())
        .interact_text()?;
    let target_profit_margin: f64 = parse_number(&margin)?;

    Ok(PricingParameters {
        labor_cost_percent,
        fixed_cost_buffer,
        enable_risk_factor,
        target_profit_margin,
    })
}

/// Prompt for a custom overhead line item. Returns `None` on an empty label.
pub fn prompt_custom_overhead() -> Result<Option<OverheadLineItem>> {
    let label: String = Input::new()
        .with_prompt("Overhead label (or press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let label = label.trim();
    if label.is_empty() {
        return Ok(None);
    }

    let amount: String = Input::new().with_prompt("Amount").interact_text()?;
    let amount: i64 = parse_number(&amount)?;

    Ok(Some(OverheadLineItem::new(label, amount, true)))
}

/// Prompt for an optional manual selling price to evaluate.
pub fn prompt_manual_price() -> Result<Option<i64>> {
    let input: String = Input::new()
        .with_prompt("Manual selling price to evaluate (Enter to derive one)")
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }

    let price: i64 = parse_number(&input)?;
    if price <= 0 {
        return Err(CostingError::InvalidInput(
            "Manual price must be positive".to_string(),
        ));
    }
    Ok(Some(price))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
