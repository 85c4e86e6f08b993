//! Configuration file loading and error types.

use std::{fs, path::Path};

use crate::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format {0:?} (expected json, yaml, yml or toml)")]
    UnsupportedFormat(String),
    #[error("validation: {0}")]
    Validation(String),
}

/// Load a config file, picking the parser from its extension.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if !matches!(ext.as_str(), "json" | "yaml" | "yml" | "toml") {
        return Err(ConfigError::UnsupportedFormat(ext));
    }

    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    match ext.as_str() {
        "json" => Ok(serde_json::from_str(&data)?),
        "toml" => Ok(toml::from_str(&data)?),
        _ => Ok(serde_yaml::from_str(&data)?),
    }
}
