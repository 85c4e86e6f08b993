//! Rule-set encoders.
//!
//! Encoders are narrow capabilities: they receive an assembled rule-set and
//! the version to write, and return the serialized bytes. Writing the bytes
//! to disk is the caller's concern.

use crate::error::RulesError;
use crate::model::RuleSet;

/// Serializes a rule-set into one artifact format.
pub trait RuleSetEncoder {
    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &'static str;

    /// Encode `rule_set` as format `version`, which overrides the version
    /// stored in the rule-set.
    fn encode(&self, rule_set: &RuleSet, version: u8) -> Result<Vec<u8>, RulesError>;
}

/// sing-box source format: pretty JSON with a two-space indent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl RuleSetEncoder for JsonEncoder {
    fn extension(&self) -> &'static str {
        ruleset_core::defaults::JSON_EXTENSION
    }

    fn encode(&self, rule_set: &RuleSet, version: u8) -> Result<Vec<u8>, RulesError> {
        let mut buf = serde_json::to_vec_pretty(&rule_set.with_version(version))?;
        buf.push(b'\n');
        Ok(buf)
    }
}

/// Parse a JSON (source format) rule-set.
pub fn decode_json(bytes: &[u8]) -> Result<RuleSet, RulesError> {
    Ok(serde_json::from_slice(bytes)?)
}
