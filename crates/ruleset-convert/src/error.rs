//! Error types for the conversion pipeline.

use std::io;
use std::path::PathBuf;

use ruleset_config::ConfigError;
use ruleset_rules::RulesError;
use thiserror::Error;

/// Fatal conversion failures. Each carries the path it concerns.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("read source {path}: {source}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("source is empty: {path}")]
    EmptySource { path: String },

    #[error("no valid rules found for: {path}")]
    EmptyResult { path: String },

    #[error("write {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("upgrade {}: {source}", .path.display())]
    Upgrade {
        path: PathBuf,
        #[source]
        source: RulesError,
    },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl ConvertError {
    /// Map an encoder failure for `path` onto the pipeline error kinds.
    pub(crate) fn encode(path: PathBuf, err: RulesError) -> Self {
        match err {
            RulesError::Upgrade(_) => Self::Upgrade { path, source: err },
            other => Self::Serialization {
                path,
                source: Box::new(other),
            },
        }
    }

    pub(crate) fn write(path: PathBuf, err: io::Error) -> Self {
        Self::Serialization {
            path,
            source: Box::new(err),
        }
    }
}
