//! Command-line entry point for the converter.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use ruleset_config::{
    CliOverrides, Config, LoggingConfig, apply_overrides, load_config, validate_config,
};
use ruleset_core::defaults::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_LOG_OUTPUT};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::convert::convert;
use crate::error::ConvertError;

/// Converter CLI arguments.
///
/// `-v/--version` selects the rule-set version, so clap's own version flag
/// is left off.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ruleset",
    about = "Convert Clash/Surge rule lists into sing-box rule-sets",
    disable_version_flag = true
)]
pub struct ConvertArgs {
    /// Source file, or `stdin` to read standard input
    pub source: String,

    /// Config file path (json/yaml/toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Resolve the effective configuration: file (if any), then CLI overrides.
pub fn resolve_config(args: &ConvertArgs) -> Result<Config, ConvertError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args.overrides);
    validate_config(&config)?;
    Ok(config)
}

/// Run one conversion with the given arguments.
pub fn run(args: ConvertArgs) -> Result<Vec<PathBuf>, ConvertError> {
    let config = resolve_config(&args)?;
    init_tracing(&config.logging);

    convert(&args.source, &config.convert).inspect_err(|e| {
        error!(source = %args.source, error = %e, "conversion failed");
    })
}

/// Initialize the tracing subscriber from the logging configuration.
///
/// - `level`: base level (trace, debug, info, warn, error). Default: info
/// - `format`: json, pretty or compact. Default: pretty
/// - `output`: stdout or stderr. Default: stderr
/// - `filters`: per-module level overrides
fn init_tracing(config: &LoggingConfig) {
    let base_level = config.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    let mut filter_str = base_level.to_string();
    for (module, level) in &config.filters {
        filter_str.push(',');
        filter_str.push_str(module);
        filter_str.push('=');
        filter_str.push_str(level);
    }
    let filter =
        EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let format = config.format.as_deref().unwrap_or(DEFAULT_LOG_FORMAT);
    let output = config.output.as_deref().unwrap_or(DEFAULT_LOG_OUTPUT);

    // try_init: a subscriber may already be installed when embedded.
    let registry = tracing_subscriber::registry().with(filter);
    let _ = match (format, output) {
        ("json", "stdout") => registry
            .with(fmt::layer().json().with_writer(io::stdout))
            .try_init(),
        ("json", _) => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        ("compact", "stdout") => registry
            .with(fmt::layer().compact().with_writer(io::stdout))
            .try_init(),
        ("compact", _) => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .try_init(),
        (_, "stdout") => registry.with(fmt::layer().with_writer(io::stdout)).try_init(),
        _ => registry.with(fmt::layer().with_writer(io::stderr)).try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let args =
            ConvertArgs::try_parse_from(["ruleset", "ads.yaml", "-o", "out/ads", "-m", "-v", "2"])
                .unwrap();
        assert_eq!(args.source, "ads.yaml");
        assert_eq!(args.overrides.output.as_deref(), Some("out/ads"));
        assert!(args.overrides.mix);
        assert_eq!(args.overrides.rule_set_version, Some(2));
        assert!(args.config.is_none());
    }

    #[test]
    fn long_version_is_rule_set_version() {
        let args = ConvertArgs::try_parse_from(["ruleset", "stdin", "--version", "1"]).unwrap();
        assert_eq!(args.overrides.rule_set_version, Some(1));
    }

    #[test]
    fn defaults_without_flags() {
        let args = ConvertArgs::try_parse_from(["ruleset", "ads.list"]).unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.convert.version, 3);
        assert!(!config.convert.mix);
        assert!(config.convert.output.is_none());
    }

    #[test]
    fn source_is_required() {
        assert!(ConvertArgs::try_parse_from(["ruleset"]).is_err());
    }

    #[test]
    fn out_of_range_version_is_rejected() {
        let args = ConvertArgs::try_parse_from(["ruleset", "ads.yaml", "-v", "4"]).unwrap();
        assert!(matches!(
            resolve_config(&args),
            Err(ConvertError::Config(_))
        ));
    }

    #[test]
    fn config_file_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ruleset.toml");
        std::fs::write(&path, "[convert]\nmix = true\nversion = 1\n").unwrap();
        let args = ConvertArgs::try_parse_from([
            "ruleset",
            "ads.yaml",
            "-c",
            path.to_str().unwrap(),
            "-v",
            "2",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();
        assert!(config.convert.mix);
        assert_eq!(config.convert.version, 2);
    }
}
