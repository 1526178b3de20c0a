use clap::Parser;
use std::path::Path;

use menu_costing_rs::cli::{Cli, Command};
use menu_costing_rs::error::Result;
use menu_costing_rs::interface::{
    display_breakdown, display_recipe, prompt_custom_overhead, prompt_manual_price,
    prompt_overhead_selection, prompt_parameters, prompt_stock_item, prompt_usage_details,
    prompt_yes_no,
};
use menu_costing_rs::state::{import_catalog_csv, load_session, save_session, CostingSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Cost => cmd_cost(&cli.file),
        Command::Recipe => cmd_recipe(&cli.file),
        Command::Overheads => cmd_overheads(&cli.file),
        Command::Params => cmd_params(&cli.file),
        Command::Import { file } => cmd_import(&cli.file, &file),
        Command::Reset {
            recipe,
            overheads,
            params,
        } => cmd_reset(&cli.file, recipe, overheads, params),
    }
}

fn load_existing(file_path: &str) -> Result<Option<CostingSession>> {
    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Session file not found: {}", file_path);
        eprintln!("Use 'import <catalog.csv>' to start a new session.");
        return Ok(None);
    }
    load_session(path).map(Some)
}

/// Compute and display the breakdown for the current recipe.
fn cmd_cost(file_path: &str) -> Result<()> {
    let Some(mut session) = load_existing(file_path)? else {
        return Ok(());
    };

    if session.recipe().is_empty() {
        println!("Recipe is empty. Use the 'recipe' command to add ingredient rows.");
        return Ok(());
    }

    display_recipe(session.recipe());

    let previous_price = session.manual_price();
    session.set_manual_price(prompt_manual_price()?);

    let result = session.calculate();
    display_breakdown(&result, session.manual_price());

    if session.manual_price() != previous_price {
        let save = prompt_yes_no("Save updated session?", true)?;
        if save {
            save_session(file_path, &session)?;
            println!("Session saved.");
        }
    }

    Ok(())
}

/// Edit the recipe interactively.
fn cmd_recipe(file_path: &str) -> Result<()> {
    let Some(mut session) = load_existing(file_path)? else {
        return Ok(());
    };

    if session.is_empty() {
        println!("Catalog is empty. Use 'import <catalog.csv>' first.");
        return Ok(());
    }

    if !session.recipe().is_empty() {
        display_recipe(session.recipe());
        let clear = prompt_yes_no("Clear the existing recipe first?", false)?;
        if clear {
            session.reset_recipe();
        }
    }

    let mut added = 0;
    loop {
        let catalog = session.catalog_items();
        let Some(name) = prompt_stock_item(&catalog)? else {
            break;
        };

        // Lookup cannot fail here; the prompt only returns catalog names.
        let item = session.get_stock_item(&name).cloned();
        let Some(item) = item else {
            continue;
        };

        let (quantity, yield_percent, override_price) = prompt_usage_details(&item)?;
        session.add_usage(&name, quantity, yield_percent, override_price)?;
        added += 1;
        println!("Added: {}", item.name);
    }

    if added > 0 {
        display_recipe(session.recipe());
        save_session(file_path, &session)?;
        println!("Added {} rows. Session saved.", added);
    }

    Ok(())
}

/// Toggle overhead line items.
fn cmd_overheads(file_path: &str) -> Result<()> {
    let Some(mut session) = load_existing(file_path)? else {
        return Ok(());
    };

    let selected = prompt_overhead_selection(session.overheads())?;
    session.set_overhead_selection(&selected);

    while let Some(item) = prompt_custom_overhead()? {
        println!("Added: {} ({})", item.label, item.amount);
        session.add_overhead(item);
    }

    save_session(file_path, &session)?;
    println!("Overheads saved.");

    Ok(())
}

/// Set the pricing parameters.
fn cmd_params(file_path: &str) -> Result<()> {
    let Some(mut session) = load_existing(file_path)? else {
        return Ok(());
    };

    let params = prompt_parameters(session.parameters())?;
    session.set_parameters(params);

    save_session(file_path, &session)?;
    println!("Parameters saved.");

    Ok(())
}

/// Import stock items from a CSV file into the catalog.
fn cmd_import(file_path: &str, csv_path: &Path) -> Result<()> {
    let path = Path::new(file_path);
    let mut session = if path.exists() {
        load_session(path)?
    } else {
        CostingSession::new(Vec::new())
    };

    let (items, skipped) = import_catalog_csv(csv_path)?;
    let imported = items.len();

    for item in items {
        session.upsert_stock_item(item);
    }

    if skipped > 0 {
        eprintln!("Skipped {} invalid rows.", skipped);
    }

    save_session(file_path, &session)?;
    println!(
        "Imported {} stock items ({} total in catalog). Session saved.",
        imported,
        session.len()
    );

    Ok(())
}

/// Reset parts of the session.
fn cmd_reset(file_path: &str, recipe: bool, overheads: bool, params: bool) -> Result<()> {
    if !recipe && !overheads && !params {
        println!("Please specify at least one reset option:");
        println!("  --recipe    Drop all recipe rows and any manual price");
        println!("  --overheads Restore the default overhead line items");
        println!("  --params    Restore default pricing parameters");
        return Ok(());
    }

    let Some(mut session) = load_existing(file_path)? else {
        return Ok(());
    };

    if recipe {
        session.reset_recipe();
        println!("Recipe cleared.");
    }

    if overheads {
        session.reset_overheads();
        println!("Overheads restored to defaults.");
    }

    if params {
        session.reset_parameters();
        println!("Parameters restored to defaults.");
    }

    save_session(file_path, &session)?;
    println!("Session saved.");

    Ok(())
}
