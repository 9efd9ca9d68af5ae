// Frameworks layer: environment configuration and the runtime bootstrap.

pub mod config;
pub mod runner;

pub use runner::{RunSettings, run, run_with_config};
