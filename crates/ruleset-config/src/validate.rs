//! Configuration validation logic.

use ruleset_core::defaults::{MAX_RULE_SET_VERSION, MIN_RULE_SET_VERSION, is_supported_version};

use crate::Config;
use crate::loader::ConfigError;

const VALID_LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];
const VALID_LOG_OUTPUTS: [&str; 2] = ["stderr", "stdout"];

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !is_supported_version(config.convert.version) {
        return Err(ConfigError::Validation(format!(
            "convert.version must be {MIN_RULE_SET_VERSION}..={MAX_RULE_SET_VERSION}, got {}",
            config.convert.version
        )));
    }
    if let Some(output) = &config.convert.output
        && output.trim().is_empty()
    {
        return Err(ConfigError::Validation("convert.output is empty".into()));
    }
    if let Some(format) = &config.logging.format
        && !VALID_LOG_FORMATS.contains(&format.as_str())
    {
        return Err(ConfigError::Validation(format!(
            "logging.format must be one of: {:?}",
            VALID_LOG_FORMATS
        )));
    }
    if let Some(output) = &config.logging.output
        && !VALID_LOG_OUTPUTS.contains(&output.as_str())
    {
        return Err(ConfigError::Validation(format!(
            "logging.output must be one of: {:?}",
            VALID_LOG_OUTPUTS
        )));
    }
    Ok(())
}
