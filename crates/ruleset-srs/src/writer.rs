//! Rule-set upgrade and binary serialization.

use std::io::Write;

use bytes::{BufMut, BytesMut};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use ruleset_core::defaults::{MIN_RULE_SET_VERSION, is_supported_version};
use ruleset_rules::{HeadlessRule, RuleSet};
use tracing::debug;

use crate::domain::DomainMatcher;
use crate::error::SrsError;
use crate::ipset::IpSet;
use crate::varbin;

/// File magic: `SRS`.
pub const MAGIC: [u8; 3] = [0x53, 0x52, 0x53];

const RULE_TYPE_DEFAULT: u8 = 0;

const ITEM_DOMAIN: u8 = 2;
const ITEM_DOMAIN_KEYWORD: u8 = 3;
const ITEM_DOMAIN_REGEX: u8 = 4;
const ITEM_SOURCE_IP_CIDR: u8 = 5;
const ITEM_IP_CIDR: u8 = 6;
const ITEM_SOURCE_PORT: u8 = 7;
const ITEM_PORT: u8 = 9;
const ITEM_PROCESS_NAME: u8 = 11;
const ITEM_PROCESS_PATH: u8 = 12;
const ITEM_FINAL: u8 = 0xFF;

/// A headless rule in binary-ready form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledRule {
    pub domain: Option<DomainMatcher>,
    pub domain_keyword: Vec<String>,
    pub domain_regex: Vec<String>,
    pub source_ip_cidr: Option<IpSet>,
    pub ip_cidr: Option<IpSet>,
    pub source_port: Vec<u16>,
    pub port: Vec<u16>,
    pub process_name: Vec<String>,
    pub process_path: Vec<String>,
    pub invert: bool,
}

/// A rule-set ready to be written at a given version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRuleSet {
    pub version: u8,
    pub rules: Vec<CompiledRule>,
}

/// Convert a plain rule-set into its binary-ready form for `version`.
///
/// Fails for versions outside the supported range and for CIDR entries
/// that are neither a prefix nor an address.
pub fn upgrade(rule_set: &RuleSet, version: u8) -> Result<CompiledRuleSet, SrsError> {
    if !is_supported_version(version) {
        return Err(SrsError::UnsupportedVersion(version));
    }
    let legacy = version == MIN_RULE_SET_VERSION;
    let rules = rule_set
        .rules
        .iter()
        .map(|rule| compile_rule(rule, legacy))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CompiledRuleSet { version, rules })
}

fn compile_rule(rule: &HeadlessRule, legacy: bool) -> Result<CompiledRule, SrsError> {
    let domain = (!rule.domain.is_empty() || !rule.domain_suffix.is_empty())
        .then(|| DomainMatcher::new(&rule.domain, &rule.domain_suffix, legacy));
    let source_ip_cidr = if rule.source_ip_cidr.is_empty() {
        None
    } else {
        Some(IpSet::parse(&rule.source_ip_cidr)?)
    };
    let ip_cidr = if rule.ip_cidr.is_empty() {
        None
    } else {
        Some(IpSet::parse(&rule.ip_cidr)?)
    };

    Ok(CompiledRule {
        domain,
        domain_keyword: rule.domain_keyword.clone(),
        domain_regex: rule.domain_regex.clone(),
        source_ip_cidr,
        ip_cidr,
        source_port: rule.source_port.clone(),
        port: rule.port.clone(),
        process_name: rule.process_name.clone(),
        process_path: rule.process_path.clone(),
        invert: rule.invert,
    })
}

/// Serialize a compiled rule-set: magic, version, zlib-compressed body.
pub fn write_rule_set(rule_set: &CompiledRuleSet) -> Result<Vec<u8>, SrsError> {
    let mut body = BytesMut::new();
    varbin::put_uvarint(&mut body, rule_set.rules.len() as u64);
    for rule in &rule_set.rules {
        write_rule(&mut body, rule);
    }

    let mut out = Vec::with_capacity(MAGIC.len() + 1 + body.len() / 2);
    out.extend_from_slice(&MAGIC);
    out.push(rule_set.version);

    let mut encoder = ZlibEncoder::new(out, Compression::best());
    encoder.write_all(&body)?;
    let out = encoder.finish()?;

    debug!(
        version = rule_set.version,
        rules = rule_set.rules.len(),
        raw = body.len(),
        compressed = out.len(),
        "encoded binary rule-set"
    );
    Ok(out)
}

fn write_rule(buf: &mut BytesMut, rule: &CompiledRule) {
    buf.put_u8(RULE_TYPE_DEFAULT);

    if let Some(domain) = &rule.domain {
        buf.put_u8(ITEM_DOMAIN);
        domain.write(buf);
    }
    if !rule.domain_keyword.is_empty() {
        buf.put_u8(ITEM_DOMAIN_KEYWORD);
        varbin::put_string_list(buf, &rule.domain_keyword);
    }
    if !rule.domain_regex.is_empty() {
        buf.put_u8(ITEM_DOMAIN_REGEX);
        varbin::put_string_list(buf, &rule.domain_regex);
    }
    if let Some(set) = &rule.source_ip_cidr {
        buf.put_u8(ITEM_SOURCE_IP_CIDR);
        set.write(buf);
    }
    if let Some(set) = &rule.ip_cidr {
        buf.put_u8(ITEM_IP_CIDR);
        set.write(buf);
    }
    if !rule.source_port.is_empty() {
        buf.put_u8(ITEM_SOURCE_PORT);
        varbin::put_u16_list(buf, &rule.source_port);
    }
    if !rule.port.is_empty() {
        buf.put_u8(ITEM_PORT);
        varbin::put_u16_list(buf, &rule.port);
    }
    if !rule.process_name.is_empty() {
        buf.put_u8(ITEM_PROCESS_NAME);
        varbin::put_string_list(buf, &rule.process_name);
    }
    if !rule.process_path.is_empty() {
        buf.put_u8(ITEM_PROCESS_PATH);
        varbin::put_string_list(buf, &rule.process_path);
    }

    buf.put_u8(ITEM_FINAL);
    buf.put_u8(u8::from(rule.invert));
}
