pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_custom_overhead, prompt_manual_price, prompt_overhead_selection, prompt_parameters,
    prompt_stock_item, prompt_usage_details, prompt_yes_no,
};
pub use render::{display_breakdown, display_catalog, display_recipe, food_cost_bar};
