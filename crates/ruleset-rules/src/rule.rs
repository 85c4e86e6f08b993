//! Rule line and rule type definitions.

const LOGICAL_TOKENS: [&str; 3] = ["AND", "OR", "NOT"];

/// A single rule line split into its type and content.
///
/// Fields after the content (policy names, `no-resolve`) are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    pub rule_type: String,
    pub content: String,
    /// The line as it appeared in the source, for diagnostics.
    pub raw: String,
}

impl RuleLine {
    /// Split a `TYPE,CONTENT[,...]` line. Returns `None` when there is no comma.
    pub fn parse(line: &str) -> Option<Self> {
        let (rule_type, rest) = line.split_once(',')?;
        let content = rest.split(',').next().unwrap_or("").trim();
        Some(Self {
            rule_type: rule_type.trim().to_string(),
            content: content.to_string(),
            raw: line.to_string(),
        })
    }

    pub fn kind(&self) -> RuleKind {
        RuleKind::from_tag(&self.rule_type)
    }

    /// Logical rules (AND/OR/NOT) are not converted.
    ///
    /// Matches whole tokens only: `DST-PORT` and `DOMAIN-KEYWORD` contain
    /// `OR` as a substring but are not logical rules.
    pub fn is_logical(&self) -> bool {
        self.raw
            .split(|c: char| c == ',' || c == '(' || c == ')' || c.is_whitespace())
            .any(|tok| LOGICAL_TOKENS.contains(&tok))
    }
}

/// Rule types understood by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Domain,
    DomainSuffix,
    DomainKeyword,
    DomainRegex,
    /// `IP-CIDR` and `IP-CIDR6`.
    IpCidr,
    SrcIpCidr,
    DstPort,
    /// `SRC-DST-PORT`, which names a source port despite the tag.
    SrcPort,
    ProcessName,
    ProcessPath,
    Unknown,
}

impl RuleKind {
    /// Map a rule tag (case-sensitive) to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "DOMAIN" => Self::Domain,
            "DOMAIN-SUFFIX" => Self::DomainSuffix,
            "DOMAIN-KEYWORD" => Self::DomainKeyword,
            "DOMAIN-REGEX" => Self::DomainRegex,
            "IP-CIDR" | "IP-CIDR6" => Self::IpCidr,
            "SRC-IP-CIDR" => Self::SrcIpCidr,
            "DST-PORT" => Self::DstPort,
            "SRC-DST-PORT" => Self::SrcPort,
            "PROCESS-NAME" => Self::ProcessName,
            "PROCESS-PATH" => Self::ProcessPath,
            _ => Self::Unknown,
        }
    }
}
