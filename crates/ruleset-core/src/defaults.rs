//! Default configuration values.
//!
//! Centralized default constants for use across all crates.

// ============================================================================
// Rule-set Version
// ============================================================================

/// Oldest rule-set format version that can be generated.
pub const MIN_RULE_SET_VERSION: u8 = 1;
/// Newest rule-set format version that can be generated.
pub const MAX_RULE_SET_VERSION: u8 = 3;
/// Version written when none is configured.
pub const DEFAULT_RULE_SET_VERSION: u8 = 3;
/// Version stamped on freshly assembled rule-sets before the emitter
/// applies the configured one.
pub const ASSEMBLED_RULE_SET_VERSION: u8 = 1;

/// Returns true if `version` can be written by the encoders.
pub const fn is_supported_version(version: u8) -> bool {
    version >= MIN_RULE_SET_VERSION && version <= MAX_RULE_SET_VERSION
}

// ============================================================================
// Source / Output Naming
// ============================================================================

/// Source argument that selects standard input.
pub const STDIN_SOURCE: &str = "stdin";
/// Input extensions stripped when deriving the output stem.
pub const STRIPPED_SOURCE_EXTENSIONS: [&str; 2] = [".yaml", ".list"];

/// Extension of the JSON (source) artifact.
pub const JSON_EXTENSION: &str = "json";
/// Extension of the binary artifact.
pub const SRS_EXTENSION: &str = "srs";

/// Suffix of the domain artifact in split mode.
pub const SUFFIX_SITE: &str = "-site";
/// Suffix of the destination CIDR artifact in split mode.
pub const SUFFIX_IP: &str = "-ip";
/// Suffix of the destination port artifact in split mode.
pub const SUFFIX_PORT: &str = "-port";
/// Suffix of the source port artifact in split mode.
pub const SUFFIX_SRC_PORT: &str = "-src-port";
/// Suffix of the source CIDR artifact in split mode.
pub const SUFFIX_SRC_IP: &str = "-src-ip";
/// Suffix of the process artifact in split mode.
pub const SUFFIX_PROCESS: &str = "-process";

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default log format (pretty, compact, json).
pub const DEFAULT_LOG_FORMAT: &str = "pretty";
/// Default log output (stderr, stdout).
pub const DEFAULT_LOG_OUTPUT: &str = "stderr";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_versions() {
        assert!(!is_supported_version(0));
        assert!(is_supported_version(1));
        assert!(is_supported_version(DEFAULT_RULE_SET_VERSION));
        assert!(!is_supported_version(4));
    }
}
