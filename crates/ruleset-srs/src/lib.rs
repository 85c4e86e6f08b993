//! Binary (`.srs`) rule-set encoder.
//!
//! Produces the sing-box binary rule-set layout:
//!
//! ```text
//! "SRS" | version: u8 | zlib( uvarint(rule count) | rule* )
//! rule  = 0x00 | item* | 0xFF | invert: u8
//! ```
//!
//! Encoding runs in two steps. [`upgrade`] validates the version and turns
//! the plain model into its binary-ready form (CIDRs merged into an IP set,
//! domains compiled into a succinct trie); [`write_rule_set`] then
//! serializes it. Only the upgrade step can reject input.

mod domain;
mod error;
mod ipset;
pub mod varbin;
mod writer;

pub use domain::DomainMatcher;
pub use error::SrsError;
pub use ipset::IpSet;
pub use writer::{CompiledRule, CompiledRuleSet, MAGIC, upgrade, write_rule_set};

use ruleset_rules::{RuleSet, RuleSetEncoder, RulesError};

/// [`RuleSetEncoder`] producing `.srs` bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrsEncoder;

impl RuleSetEncoder for SrsEncoder {
    fn extension(&self) -> &'static str {
        ruleset_core::defaults::SRS_EXTENSION
    }

    fn encode(&self, rule_set: &RuleSet, version: u8) -> Result<Vec<u8>, RulesError> {
        let compiled = upgrade(rule_set, version)?;
        Ok(write_rule_set(&compiled)?)
    }
}
