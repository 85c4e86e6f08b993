//! Line-oriented rule list parser (Surge `.list` / Clash text format).

/// Parse a rule list into raw rule lines.
///
/// Lines are trimmed; blank lines, `#` comments, and lines without a comma
/// (which cannot carry a `TYPE,VALUE` pair) are dropped.
pub fn parse_rule_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.contains(','))
        .map(str::to_string)
        .collect()
}
