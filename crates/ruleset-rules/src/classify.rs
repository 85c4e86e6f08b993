//! Rule classification: sorts rule lines into per-matcher buckets.

use tracing::{debug, warn};

use crate::rule::{RuleKind, RuleLine};

/// Non-dot-crossing, non-greedy replacement for a `*` in a DOMAIN rule.
const WILDCARD_PATTERN: &str = r"[^\.]*?";

/// Matcher values accumulated over one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBuckets {
    pub domain: Vec<String>,
    pub domain_suffix: Vec<String>,
    pub domain_keyword: Vec<String>,
    pub domain_regex: Vec<String>,
    pub ip_cidr: Vec<String>,
    pub source_ip_cidr: Vec<String>,
    pub port: Vec<u16>,
    pub source_port: Vec<u16>,
    pub process_name: Vec<String>,
    pub process_path: Vec<String>,
    /// Set when a bare `DOMAIN,*` line was seen.
    pub has_star_only_domain: bool,
}

impl RuleBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any of the four domain buckets holds a value.
    pub fn has_domain_rules(&self) -> bool {
        !self.domain.is_empty()
            || !self.domain_suffix.is_empty()
            || !self.domain_keyword.is_empty()
            || !self.domain_regex.is_empty()
    }

    /// Total number of values across all buckets.
    pub fn len(&self) -> usize {
        self.domain.len()
            + self.domain_suffix.len()
            + self.domain_keyword.len()
            + self.domain_regex.len()
            + self.ip_cidr.len()
            + self.source_ip_cidr.len()
            + self.port.len()
            + self.source_port.len()
            + self.process_name.len()
            + self.process_path.len()
    }

    /// Returns true if no bucket holds a value and no `DOMAIN,*` was seen.
    pub fn is_empty(&self) -> bool {
        self.len() == 0 && !self.has_star_only_domain
    }
}

/// Why a line contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// No `,` between type and content.
    Malformed,
    /// AND / OR / NOT composite rule.
    Logical,
    UnknownType,
    EmptyContent,
}

/// Result of classifying a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    Added(RuleKind),
    /// `DOMAIN,*`: only the catch-all flag was set.
    StarOnlyDomain,
    Discarded(DiscardReason),
}

/// Classify one rule line into `buckets`.
pub fn classify(line: &RuleLine, buckets: &mut RuleBuckets) -> Classified {
    if line.is_logical() {
        return Classified::Discarded(DiscardReason::Logical);
    }
    let kind = line.kind();
    let content = line.content.as_str();
    if content.is_empty() {
        return Classified::Discarded(DiscardReason::EmptyContent);
    }

    match kind {
        RuleKind::Domain => {
            if content == "*" {
                buckets.has_star_only_domain = true;
                return Classified::StarOnlyDomain;
            }
            if content.contains('*') {
                buckets.domain_regex.push(wildcard_to_regex(content));
            } else if let Some(suffix) = content.strip_prefix('+')
                && suffix.starts_with('.')
            {
                buckets.domain_suffix.push(suffix.to_string());
            } else {
                buckets.domain.push(content.to_string());
            }
        }
        RuleKind::DomainSuffix => {
            if content.starts_with('.') {
                buckets.domain_suffix.push(content.to_string());
            } else {
                // A bare suffix matches the domain itself as well as its subdomains.
                buckets.domain.push(content.to_string());
                buckets.domain_suffix.push(format!(".{content}"));
            }
        }
        RuleKind::DomainKeyword => buckets.domain_keyword.push(content.to_string()),
        RuleKind::DomainRegex => buckets.domain_regex.push(content.to_string()),
        RuleKind::IpCidr => buckets.ip_cidr.push(content.to_string()),
        RuleKind::SrcIpCidr => buckets.source_ip_cidr.push(content.to_string()),
        RuleKind::DstPort => buckets.port.push(parse_port(line)),
        RuleKind::SrcPort => buckets.source_port.push(parse_port(line)),
        RuleKind::ProcessName => buckets.process_name.push(content.to_string()),
        RuleKind::ProcessPath => buckets.process_path.push(content.to_string()),
        RuleKind::Unknown => return Classified::Discarded(DiscardReason::UnknownType),
    }
    Classified::Added(kind)
}

/// Counters for one classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub accepted: usize,
    pub discarded: usize,
}

/// Buckets plus counters produced by [`classify_lines`].
#[derive(Debug, Clone, Default)]
pub struct ClassifyOutcome {
    pub buckets: RuleBuckets,
    pub stats: ClassifyStats,
}

/// Classify every raw line into a fresh set of buckets.
pub fn classify_lines<S: AsRef<str>>(lines: &[S]) -> ClassifyOutcome {
    let mut outcome = ClassifyOutcome::default();
    for raw in lines {
        let raw: &str = raw.as_ref();
        let result = match RuleLine::parse(raw) {
            Some(line) => classify(&line, &mut outcome.buckets),
            None => Classified::Discarded(DiscardReason::Malformed),
        };
        match result {
            Classified::Discarded(reason) => {
                debug!(rule = raw, ?reason, "skipping rule");
                outcome.stats.discarded += 1;
            }
            _ => outcome.stats.accepted += 1,
        }
    }
    outcome
}

/// Rewrite a wildcard domain into a regex and drop its first character,
/// treating a leading wildcard as implied.
fn wildcard_to_regex(content: &str) -> String {
    let replaced = content.replace('*', WILDCARD_PATTERN);
    let mut chars = replaced.chars();
    chars.next();
    chars.as_str().to_string()
}

/// Malformed ports become 0 rather than dropping the line.
fn parse_port(line: &RuleLine) -> u16 {
    match line.content.parse::<u16>() {
        Ok(port) => port,
        Err(e) => {
            warn!(rule = %line.raw, error = %e, "malformed port, using 0");
            0
        }
    }
}
