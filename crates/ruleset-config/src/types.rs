//! Configuration type definitions for conversion and logging.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Output stem override. `None` derives the stem from the source path.
    #[serde(default)]
    pub output: Option<String>,
    /// Combine every rule category into a single rule-set.
    #[serde(default)]
    pub mix: bool,
    /// Rule-set format version written to both artifacts (1-3).
    #[serde(default = "default_rule_set_version")]
    pub version: u8,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output: None,
            mix: false,
            version: default_rule_set_version(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error). Default: info
    pub level: Option<String>,
    /// Output format (json, pretty, compact). Default: pretty
    #[serde(default)]
    pub format: Option<String>,
    /// Output target (stdout, stderr). Default: stderr
    #[serde(default)]
    pub output: Option<String>,
    /// Per-module log level overrides, e.g. `ruleset_srs = "debug"`.
    #[serde(default)]
    pub filters: HashMap<String, String>,
}
