use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MenuCosting — a menu costing CLI that derives food cost, overhead, and
/// protected selling prices.
#[derive(Parser, Debug)]
#[command(name = "menu_costing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the costing session JSON file.
    #[arg(short, long, default_value = "costing_session.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute and display the cost breakdown for the current recipe.
    Cost,

    /// Edit the recipe: add ingredient rows from the stock catalog.
    Recipe,

    /// Toggle overhead line items and add custom ones.
    Overheads,

    /// Set the pricing parameters (labor %, buffer, risk, target margin).
    Params,

    /// Import stock items into the catalog from a CSV file.
    Import {
        /// CSV file with name,unit,unit_price columns.
        file: PathBuf,
    },

    /// Reset parts of the session.
    Reset {
        /// Drop all recipe rows and any manual price.
        #[arg(long)]
        recipe: bool,

        /// Restore the default overhead line items.
        #[arg(long)]
        overheads: bool,

        /// Restore default pricing parameters.
        #[arg(long)]
        params: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Cost
    }
}
