//! IP set: CIDR prefixes and addresses normalized into sorted ranges.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bytes::{BufMut, BytesMut};
use ipnet::IpNet;

use crate::error::SrsError;
use crate::varbin;

const IP_SET_FORMAT: u8 = 1;

/// Non-overlapping, non-adjacent inclusive ranges, IPv4 before IPv6.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpSet {
    v4: Vec<(u32, u32)>,
    v6: Vec<(u128, u128)>,
}

impl IpSet {
    /// Build from `a.b.c.d/n`, `x::/n`, or bare address entries.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, SrsError> {
        let mut v4 = Vec::new();
        let mut v6 = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let entry: &str = entry.as_ref();
            let entry = entry.trim();
            match entry.parse::<IpNet>() {
                Ok(IpNet::V4(net)) => v4.push((u32::from(net.network()), u32::from(net.broadcast()))),
                Ok(IpNet::V6(net)) => v6.push((u128::from(net.network()), u128::from(net.broadcast()))),
                Err(_) => match entry.parse::<IpAddr>() {
                    Ok(IpAddr::V4(addr)) => v4.push((u32::from(addr), u32::from(addr))),
                    Ok(IpAddr::V6(addr)) => v6.push((u128::from(addr), u128::from(addr))),
                    Err(_) => {
                        return Err(SrsError::InvalidCidr {
                            index,
                            value: entry.to_string(),
                        });
                    }
                },
            }
        }

        Ok(Self {
            v4: merge(v4),
            v6: merge(v6),
        })
    }

    /// Number of ranges.
    pub(crate) fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn write(&self, buf: &mut BytesMut) {
        buf.put_u8(IP_SET_FORMAT);
        buf.put_u64(self.len() as u64);
        for &(from, to) in &self.v4 {
            varbin::put_bytes(buf, &Ipv4Addr::from(from).octets());
            varbin::put_bytes(buf, &Ipv4Addr::from(to).octets());
        }
        for &(from, to) in &self.v6 {
            varbin::put_bytes(buf, &Ipv6Addr::from(from).octets());
            varbin::put_bytes(buf, &Ipv6Addr::from(to).octets());
        }
    }
}

/// Sort and coalesce overlapping or touching ranges.
fn merge<T>(mut ranges: Vec<(T, T)>) -> Vec<(T, T)>
where
    T: Copy + Ord + Successor,
{
    ranges.sort_unstable();
    let mut merged: Vec<(T, T)> = Vec::with_capacity(ranges.len());
    for (from, to) in ranges {
        if let Some(last) = merged.last_mut()
            && last.1.successor().is_none_or(|next| from <= next)
        {
            if to > last.1 {
                last.1 = to;
            }
            continue;
        }
        merged.push((from, to));
    }
    merged
}

/// Next address, or `None` at the top of the address space.
trait Successor: Sized {
    fn successor(self) -> Option<Self>;
}

impl Successor for u32 {
    fn successor(self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl Successor for u128 {
    fn successor(self) -> Option<Self> {
        self.checked_add(1)
    }
}
