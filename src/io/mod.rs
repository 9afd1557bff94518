pub mod json;
pub mod text;

pub use json::{figures_from_json, figures_to_json, load_json, save_json};
pub use text::{load_figures, save_figures, write_figures};
