//! Rule line extraction for Clash rule-providers and plain rule lists.

pub mod clash;
pub mod list;

use tracing::debug;

pub use clash::parse_clash_payload;
pub use list::parse_rule_list;

/// Extract raw rule lines from source bytes.
///
/// A Clash rule-provider document is tried first and its `payload` is
/// returned verbatim. Anything else is read as a line-oriented list.
/// An empty result is not an error here.
pub fn extract_rules(content: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(content);
    match parse_clash_payload(&text) {
        Ok(rules) => {
            debug!(count = rules.len(), "parsed rule-provider payload");
            rules
        }
        Err(e) => {
            debug!(error = %e, "not a rule-provider document, reading as rule list");
            let rules = parse_rule_list(&text);
            debug!(count = rules.len(), "parsed rule list");
            rules
        }
    }
}
