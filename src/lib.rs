pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod level;
pub mod use_cases;

pub use frameworks::{RunSettings, run, run_with_config};
