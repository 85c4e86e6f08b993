//! Rule-provider conversion core for ruleset-rs.
//!
//! Turns Clash rule-provider (YAML) and Surge/Clash classical rule lists
//! into sing-box headless rule-sets. Supports DOMAIN, DOMAIN-SUFFIX,
//! DOMAIN-KEYWORD, DOMAIN-REGEX, IP-CIDR(6), SRC-IP-CIDR, DST-PORT,
//! SRC-DST-PORT, PROCESS-NAME and PROCESS-PATH rule types.
//!
//! # Architecture
//!
//! - **Parser**: extracts rule lines from a YAML `payload` or a plain list
//! - **Classifier**: sorts each line into a [`RuleBuckets`] field
//! - **Assembler**: groups buckets into one or more named [`RuleSet`]s
//! - **Encoder**: [`RuleSetEncoder`] capability, with the JSON encoder here
//!
//! # Example
//!
//! ```
//! use ruleset_rules::{AssemblyMode, assemble, classify_lines, parser};
//!
//! let lines = parser::extract_rules(b"DOMAIN-SUFFIX,example.com\nIP-CIDR,10.0.0.0/8\n");
//! let outcome = classify_lines(&lines);
//! let artifacts = assemble(outcome.buckets, AssemblyMode::Split, "rules").unwrap();
//!
//! assert_eq!(artifacts.len(), 2);
//! assert_eq!(artifacts[0].name, "rules-site");
//! assert_eq!(artifacts[1].name, "rules-ip");
//! ```

pub mod assemble;
pub mod classify;
pub mod encode;
pub mod error;
pub mod model;
pub mod parser;
pub mod rule;

pub use assemble::{Artifact, AssemblyMode, assemble};
pub use classify::{
    ClassifyOutcome, ClassifyStats, Classified, DiscardReason, RuleBuckets, classify, classify_lines,
};
pub use encode::{JsonEncoder, RuleSetEncoder, decode_json};
pub use error::RulesError;
pub use model::{HeadlessRule, RuleSet};
pub use rule::{RuleKind, RuleLine};
