//! Domain matcher compiled into a succinct trie.
//!
//! Keys are reversed domains so that suffixes share trie prefixes. Suffix
//! entries carry a marker label before the reversal: `\r` for "this label
//! boundary and below" (`.example.com`) and `\n` for "the domain itself and
//! below" (`example.com` as a version 2+ suffix).

use bytes::{BufMut, BytesMut};

use crate::varbin;

const PREFIX_LABEL: char = '\r';
const ROOT_LABEL: char = '\n';
const MATCHER_FORMAT: u8 = 1;

/// Compiled DOMAIN + DOMAIN-SUFFIX matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainMatcher {
    leaves: Vec<u64>,
    label_bitmap: Vec<u64>,
    labels: Vec<u8>,
}

impl DomainMatcher {
    /// Build from exact domains and suffixes.
    ///
    /// `legacy` selects the version 1 encoding, where a suffix without a
    /// leading dot expands into an exact entry plus a dotted suffix entry.
    pub fn new<S: AsRef<str>>(domains: &[S], suffixes: &[S], legacy: bool) -> Self {
        let mut seen = std::collections::HashSet::new();
        let mut keys: Vec<String> = Vec::with_capacity(domains.len() + 2 * suffixes.len());

        for suffix in suffixes {
            let suffix: &str = suffix.as_ref();
            if suffix.is_empty() || !seen.insert(suffix.to_string()) {
                continue;
            }
            if suffix.starts_with('.') {
                keys.push(reverse(&format!("{PREFIX_LABEL}{suffix}")));
            } else if legacy {
                keys.push(reverse(suffix));
                let dotted = format!(".{suffix}");
                if seen.insert(dotted.clone()) {
                    keys.push(reverse(&format!("{PREFIX_LABEL}{dotted}")));
                }
            } else {
                keys.push(reverse(&format!("{ROOT_LABEL}{suffix}")));
            }
        }
        for domain in domains {
            let domain: &str = domain.as_ref();
            if !seen.insert(domain.to_string()) {
                continue;
            }
            keys.push(reverse(domain));
        }

        keys.sort();
        keys.dedup();
        Self::from_sorted_keys(&keys)
    }

    /// Level-order (LOUDS-style) encoding of the trie over `keys`, which
    /// must be sorted and unique.
    fn from_sorted_keys(keys: &[String]) -> Self {
        let mut matcher = Self::default();
        if keys.is_empty() {
            return matcher;
        }

        let keys: Vec<&[u8]> = keys.iter().map(|k| k.as_bytes()).collect();
        let mut label_index = 0usize;
        // (first key, end key, column)
        let mut queue = vec![(0usize, keys.len(), 0usize)];
        let mut node = 0usize;

        while node < queue.len() {
            let (mut start, end, col) = queue[node];
            if col == keys[start].len() {
                start += 1;
                set_bit(&mut matcher.leaves, node, true);
            }
            let mut j = start;
            while j < end {
                let from = j;
                while j < end && keys[j][col] == keys[from][col] {
                    j += 1;
                }
                queue.push((from, j, col + 1));
                matcher.labels.push(keys[from][col]);
                set_bit(&mut matcher.label_bitmap, label_index, false);
                label_index += 1;
            }
            set_bit(&mut matcher.label_bitmap, label_index, true);
            label_index += 1;
            node += 1;
        }
        matcher
    }

    pub fn write(&self, buf: &mut BytesMut) {
        buf.put_u8(MATCHER_FORMAT);
        varbin::put_u64_list(buf, &self.leaves);
        varbin::put_u64_list(buf, &self.label_bitmap);
        varbin::put_bytes(buf, &self.labels);
    }
}

/// Grow `bitmap` to cover bit `i`, then set it when `value` is true.
fn set_bit(bitmap: &mut Vec<u64>, i: usize, value: bool) {
    while i >> 6 >= bitmap.len() {
        bitmap.push(0);
    }
    if value {
        bitmap[i >> 6] |= 1u64 << (i & 63);
    }
}

fn reverse(domain: &str) -> String {
    domain.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn single_key_trie() {
        let m = DomainMatcher::from_sorted_keys(&["a".to_string()]);
        assert_eq!(m.leaves, vec![0b10]);
        assert_eq!(m.label_bitmap, vec![0b110]);
        assert_eq!(m.labels, b"a");
    }

    #[test]
    fn shared_prefix_trie() {
        let m = DomainMatcher::from_sorted_keys(&["ab".to_string(), "ac".to_string()]);
        assert_eq!(m.labels, b"abc");
        // nodes 2 and 3 are leaves
        assert_eq!(m.leaves, vec![0b1100]);
        // bitmap: 0 1 | 0 0 1 | 1 | 1
        assert_eq!(m.label_bitmap, vec![0b111_0010]);
    }

    #[test]
    fn key_that_is_prefix_of_another() {
        let m = DomainMatcher::from_sorted_keys(&["a".to_string(), "ab".to_string()]);
        assert_eq!(m.labels, b"ab");
        // node 1 ("a") and node 2 ("ab") are leaves
        assert_eq!(m.leaves, vec![0b110]);
    }

    #[test]
    fn exact_domain_key_is_reversed() {
        let m = DomainMatcher::new(&["ab.c"], NONE, false);
        let expected = DomainMatcher::from_sorted_keys(&["c.ba".to_string()]);
        assert_eq!(m, expected);
    }

    #[test]
    fn dotted_suffix_gets_prefix_label() {
        let m = DomainMatcher::new(NONE, &[".a.com"], false);
        let expected = DomainMatcher::from_sorted_keys(&["moc.a.\r".to_string()]);
        assert_eq!(m, expected);
    }

    #[test]
    fn bare_suffix_uses_root_label() {
        let m = DomainMatcher::new(NONE, &["a.com"], false);
        let expected = DomainMatcher::from_sorted_keys(&["moc.a\n".to_string()]);
        assert_eq!(m, expected);
    }

    #[test]
    fn bare_suffix_legacy_expands() {
        let m = DomainMatcher::new(NONE, &["a.com"], true);
        let mut keys = vec!["moc.a".to_string(), "moc.a.\r".to_string()];
        keys.sort();
        assert_eq!(m, DomainMatcher::from_sorted_keys(&keys));
    }

    #[test]
    fn duplicates_are_collapsed() {
        let once = DomainMatcher::new(&["a.com"], &[".a.com"], false);
        let twice = DomainMatcher::new(&["a.com", "a.com"], &[".a.com", ".a.com"], false);
        assert_eq!(once, twice);
    }

    #[test]
    fn domain_equal_to_suffix_string_is_skipped() {
        let both = DomainMatcher::new(&[".a.com"], &[".a.com"], false);
        let suffix_only = DomainMatcher::new(NONE, &[".a.com"], false);
        assert_eq!(both, suffix_only);
    }

    #[test]
    fn write_layout() {
        let m = DomainMatcher::from_sorted_keys(&["a".to_string()]);
        let mut buf = BytesMut::new();
        m.write(&mut buf);
        let mut expected = vec![1, 1];
        expected.extend_from_slice(&2u64.to_be_bytes());
        expected.push(1);
        expected.extend_from_slice(&6u64.to_be_bytes());
        expected.extend_from_slice(&[1, b'a']);
        assert_eq!(&buf[..], &expected[..]);
    }
}
