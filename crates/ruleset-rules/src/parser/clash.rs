//! Clash rule-provider parser (YAML format).

use serde::Deserialize;

use crate::error::RulesError;

#[derive(Debug, Deserialize)]
struct RuleProvider {
    #[serde(default)]
    payload: Vec<String>,
}

/// Parse a Clash classical rule-provider and return its `payload` lines.
///
/// A mapping without `payload` yields an empty list, matching how Clash
/// treats such providers. Documents that are not a mapping (for instance a
/// plain rule list, which YAML reads as one long scalar) fail to parse.
pub fn parse_clash_payload(content: &str) -> Result<Vec<String>, RulesError> {
    let provider: RuleProvider = serde_yaml::from_str(content)?;
    Ok(provider.payload)
}
