//! Error types for rule conversion.

use thiserror::Error;

/// Errors that can occur while converting rules.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no valid rules found for: {path}")]
    EmptyResult { path: String },

    #[error("upgrade error: {0}")]
    Upgrade(String),

    #[error("encode error: {0}")]
    Encode(String),
}
