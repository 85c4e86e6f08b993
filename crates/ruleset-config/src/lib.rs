//! Configuration loading, CLI overrides and validation.
//!
//! A config file is optional: every field has a default, and command-line
//! flags are applied on top of whatever the file provides.

mod cli;
mod defaults;
mod loader;
mod types;
mod validate;

pub use cli::{CliOverrides, apply_overrides};
pub use loader::{ConfigError, load_config};
pub use types::{Config, ConvertConfig, LoggingConfig};
pub use validate::validate_config;
