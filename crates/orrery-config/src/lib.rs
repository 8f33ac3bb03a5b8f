//! Configuration system for Orrery.
//!
//! Scene parameters (sun, asteroid belt, body catalog) and simulation settings
//! persist to disk as RON files. CLI flags parsed with clap override loaded values.

mod catalog;
mod cli;
mod config;
mod error;

pub use catalog::{BodyCatalog, BodyEntry, SUN_BODY_NAME};
pub use cli::CliArgs;
pub use config::{
    BeltConfig, CONFIG_FILE_NAME, Config, DebugConfig, SimulationConfig, SunConfig,
};
pub use error::ConfigError;
