//! # ruleset-rs
//!
//! Converts Clash rule-providers and Surge/Clash rule lists into sing-box
//! rule-sets, written both as JSON source and as binary `.srs`.
//!
//! ## Crates
//!
//! - [`ruleset_core`] - Shared constants and defaults
//! - [`ruleset_config`] - Configuration loading and validation
//! - [`ruleset_rules`] - Rule extraction, classification and assembly
//! - [`ruleset_srs`] - Binary rule-set encoder
//! - [`ruleset_convert`] - Conversion pipeline and CLI

pub use ruleset_config as config;
pub use ruleset_convert as convert;
pub use ruleset_core as core;
pub use ruleset_rules as rules;
pub use ruleset_srs as srs;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ruleset_config::{Config, ConvertConfig, LoggingConfig};
    pub use ruleset_convert::{ConvertError, Emitter, convert};
    pub use ruleset_rules::{
        Artifact, AssemblyMode, HeadlessRule, JsonEncoder, RuleSet, RuleSetEncoder, assemble,
        classify_lines,
    };
    pub use ruleset_srs::SrsEncoder;
}
