//! The conversion pipeline: load, extract, classify, assemble, emit.

use std::path::PathBuf;

use ruleset_config::ConvertConfig;
use ruleset_core::defaults::is_supported_version;
use ruleset_rules::{AssemblyMode, RulesError, assemble, classify_lines, parser};
use tracing::{debug, info};

use crate::emit::Emitter;
use crate::error::ConvertError;
use crate::output::output_stem;
use crate::source::load_source;

/// Convert one source into rule-set files and return the written paths.
///
/// `source` is a file path or `stdin`. Nothing is written when the source
/// yields no rules or the requested version is unsupported.
pub fn convert(source: &str, config: &ConvertConfig) -> Result<Vec<PathBuf>, ConvertError> {
    let stem = output_stem(source, config.output.as_deref());
    if !is_supported_version(config.version) {
        return Err(ConvertError::Upgrade {
            path: PathBuf::from(&stem),
            source: RulesError::Upgrade(format!(
                "unsupported rule-set version: {}",
                config.version
            )),
        });
    }

    let content = load_source(source)?;
    let lines = parser::extract_rules(&content);
    let outcome = classify_lines(&lines);
    debug!(
        source,
        accepted = outcome.stats.accepted,
        discarded = outcome.stats.discarded,
        "classified rules"
    );

    let mode = AssemblyMode::from_mix(config.mix);
    let artifacts = assemble(outcome.buckets, mode, &stem).map_err(|e| match e {
        RulesError::EmptyResult { path } => ConvertError::EmptyResult { path },
        other => ConvertError::encode(PathBuf::from(&stem), other),
    })?;

    let written = Emitter::new(config.version).emit_all(&artifacts)?;
    info!(
        source,
        artifacts = artifacts.len(),
        files = written.len(),
        version = config.version,
        ?mode,
        "conversion complete"
    );
    Ok(written)
}
