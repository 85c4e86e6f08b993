//! sing-box headless rule-set model.
//!
//! Field names and ordering follow the sing-box source format so the JSON
//! artifact can be consumed (or recompiled) by sing-box directly.

use ruleset_core::defaults::ASSEMBLED_RULE_SET_VERSION;
use serde::{Deserialize, Serialize};

/// A default (non-logical) headless rule: every non-empty matcher list must
/// match, optionally inverted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlessRule {
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub domain: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub domain_suffix: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub domain_keyword: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub domain_regex: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub source_ip_cidr: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub ip_cidr: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub source_port: Vec<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub port: Vec<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub process_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "listable")]
    pub process_path: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub invert: bool,
}

impl HeadlessRule {
    /// Catch-all approximation of `DOMAIN,*`: anything whose domain does
    /// not contain a dot.
    pub fn star_only() -> Self {
        Self {
            domain_keyword: vec![".".to_string()],
            invert: true,
            ..Default::default()
        }
    }

    /// Returns true if no matcher list is populated.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
            && self.domain_suffix.is_empty()
            && self.domain_keyword.is_empty()
            && self.domain_regex.is_empty()
            && self.source_ip_cidr.is_empty()
            && self.ip_cidr.is_empty()
            && self.source_port.is_empty()
            && self.port.is_empty()
            && self.process_name.is_empty()
            && self.process_path.is_empty()
    }
}

/// A versioned rule-set. Rules compose as OR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub version: u8,
    pub rules: Vec<HeadlessRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<HeadlessRule>) -> Self {
        Self {
            version: ASSEMBLED_RULE_SET_VERSION,
            rules,
        }
    }

    /// Copy of this rule-set stamped with `version`.
    pub fn with_version(&self, version: u8) -> Self {
        Self {
            version,
            rules: self.rules.clone(),
        }
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// sing-box "listable" encoding: a one-element list is written as a bare
/// value, and either shape is accepted when reading.
mod listable {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<T, S>(values: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match values.as_slice() {
            [single] => single.serialize(serializer),
            all => all.serialize(serializer),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany<T> {
            Many(Vec<T>),
            One(T),
        }

        Ok(match OneOrMany::<T>::deserialize(deserializer)? {
            OneOrMany::Many(values) => values,
            OneOrMany::One(value) => vec![value],
        })
    }
}
