//! Rule-set assembly: groups classified buckets into named rule-sets.

use ruleset_core::defaults::{
    SUFFIX_IP, SUFFIX_PORT, SUFFIX_PROCESS, SUFFIX_SITE, SUFFIX_SRC_IP, SUFFIX_SRC_PORT,
};
use tracing::debug;

use crate::classify::RuleBuckets;
use crate::error::RulesError;
use crate::model::{HeadlessRule, RuleSet};

/// How rule categories map onto output rule-sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssemblyMode {
    /// One rule-set per category (`-site`, `-ip`, `-port`, ...).
    #[default]
    Split,
    /// Every category in a single unsuffixed rule-set.
    Mixed,
}

impl AssemblyMode {
    pub fn from_mix(mix: bool) -> Self {
        if mix { Self::Mixed } else { Self::Split }
    }
}

/// A rule-set together with the output stem it is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Output stem including any category suffix, without version or extension.
    pub name: String,
    pub rule_set: RuleSet,
}

/// Assemble buckets into artifacts.
///
/// `stem` is the output path stem; split-mode artifacts append a category
/// suffix to it. Fails with [`RulesError::EmptyResult`] when no bucket
/// produced a rule.
pub fn assemble(
    buckets: RuleBuckets,
    mode: AssemblyMode,
    stem: &str,
) -> Result<Vec<Artifact>, RulesError> {
    let artifacts = match mode {
        AssemblyMode::Split => assemble_split(buckets, stem),
        AssemblyMode::Mixed => assemble_mixed(buckets, stem),
    };
    if artifacts.is_empty() {
        return Err(RulesError::EmptyResult {
            path: stem.to_string(),
        });
    }
    debug!(?mode, artifacts = artifacts.len(), "assembled rule-sets");
    Ok(artifacts)
}

fn assemble_split(b: RuleBuckets, stem: &str) -> Vec<Artifact> {
    let mut artifacts = Vec::new();
    let mut push = |suffix: &str, rules: Vec<HeadlessRule>| {
        if !rules.is_empty() {
            artifacts.push(Artifact {
                name: format!("{stem}{suffix}"),
                rule_set: RuleSet::new(rules),
            });
        }
    };

    let mut site = Vec::new();
    if b.has_domain_rules() || b.has_star_only_domain {
        site.push(HeadlessRule {
            domain: b.domain,
            domain_suffix: b.domain_suffix,
            domain_keyword: b.domain_keyword,
            domain_regex: b.domain_regex,
            ..Default::default()
        });
        if b.has_star_only_domain {
            site.push(HeadlessRule::star_only());
        }
    }
    push(SUFFIX_SITE, site);

    push(SUFFIX_IP, single(b.ip_cidr, |v| HeadlessRule {
        ip_cidr: v,
        ..Default::default()
    }));
    push(SUFFIX_PORT, single(b.port, |v| HeadlessRule {
        port: v,
        ..Default::default()
    }));
    push(SUFFIX_SRC_PORT, single(b.source_port, |v| HeadlessRule {
        source_port: v,
        ..Default::default()
    }));
    push(SUFFIX_SRC_IP, single(b.source_ip_cidr, |v| HeadlessRule {
        source_ip_cidr: v,
        ..Default::default()
    }));
    push(SUFFIX_PROCESS, process_rules(b.process_name, b.process_path));

    artifacts
}

fn assemble_mixed(b: RuleBuckets, stem: &str) -> Vec<Artifact> {
    let mut rules = Vec::new();

    if b.has_domain_rules() || !b.ip_cidr.is_empty() || b.has_star_only_domain {
        rules.push(HeadlessRule {
            domain: b.domain,
            domain_suffix: b.domain_suffix,
            domain_keyword: b.domain_keyword,
            domain_regex: b.domain_regex,
            ip_cidr: b.ip_cidr,
            ..Default::default()
        });
        if b.has_star_only_domain {
            rules.push(HeadlessRule::star_only());
        }
    }
    rules.extend(single(b.port, |v| HeadlessRule {
        port: v,
        ..Default::default()
    }));
    rules.extend(single(b.source_port, |v| HeadlessRule {
        source_port: v,
        ..Default::default()
    }));
    rules.extend(single(b.source_ip_cidr, |v| HeadlessRule {
        source_ip_cidr: v,
        ..Default::default()
    }));
    rules.extend(process_rules(b.process_name, b.process_path));

    if rules.is_empty() {
        return Vec::new();
    }
    vec![Artifact {
        name: stem.to_string(),
        rule_set: RuleSet::new(rules),
    }]
}

/// One rule built from `values`, or none when the bucket is empty.
fn single<T>(values: Vec<T>, build: impl FnOnce(Vec<T>) -> HeadlessRule) -> Vec<HeadlessRule> {
    if values.is_empty() {
        Vec::new()
    } else {
        vec![build(values)]
    }
}

/// Process names and paths stay separate rules so either one matches.
fn process_rules(names: Vec<String>, paths: Vec<String>) -> Vec<HeadlessRule> {
    let mut rules = single(names, |v| HeadlessRule {
        process_name: v,
        ..Default::default()
    });
    rules.extend(single(paths, |v| HeadlessRule {
        process_path: v,
        ..Default::default()
    }));
    rules
}
