pub mod prompts;
pub mod render;

pub use prompts::{
    parse_fuel_type, prompt_field, prompt_fuel_type, prompt_yes_no, run_interactive,
    suggest_fuel_type,
};
pub use render::{display_history, display_inputs, display_result, Palette};
