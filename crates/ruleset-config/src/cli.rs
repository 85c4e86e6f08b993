//! CLI override definitions and application logic.

use clap::Parser;

use crate::Config;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Output file stem (default: source path without .yaml/.list)
    #[arg(short, long)]
    pub output: Option<String>,
    /// Mix mode: combine every rule type into one rule-set
    #[arg(short, long)]
    pub mix: bool,
    /// Rule-set version (1-3)
    #[arg(short = 'v', long = "version")]
    pub rule_set_version: Option<u8>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Override log format (pretty/compact/json)
    #[arg(long)]
    pub log_format: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.output {
        config.convert.output = Some(v.clone());
    }
    // `--mix` can only switch mix mode on; a config file may also enable it.
    if overrides.mix {
        config.convert.mix = true;
    }
    if let Some(v) = overrides.rule_set_version {
        config.convert.version = v;
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
    if let Some(v) = &overrides.log_format {
        config.logging.format = Some(v.clone());
    }
}
