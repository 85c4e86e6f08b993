//! Error types for binary rule-set encoding.

use ruleset_rules::RulesError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SrsError {
    #[error("unsupported rule-set version: {0}")]
    UnsupportedVersion(u8),

    #[error("parse ip_cidr [{index}]: invalid prefix or address: {value}")]
    InvalidCidr { index: usize, value: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SrsError> for RulesError {
    fn from(e: SrsError) -> Self {
        match e {
            SrsError::Io(_) => RulesError::Encode(e.to_string()),
            _ => RulesError::Upgrade(e.to_string()),
        }
    }
}
