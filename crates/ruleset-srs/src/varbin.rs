//! Variable-length primitives shared by the binary writers.
//!
//! Lengths and counts are unsigned LEB128 varints; fixed-width integers
//! are big-endian.

use bytes::{BufMut, BytesMut};

/// Append `value` as an unsigned LEB128 varint.
pub fn put_uvarint(buf: &mut BytesMut, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value as u8) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Length-prefixed byte string.
pub fn put_bytes(buf: &mut BytesMut, bytes: &[u8]) {
    put_uvarint(buf, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Count-prefixed list of length-prefixed strings.
pub fn put_string_list<S: AsRef<str>>(buf: &mut BytesMut, values: &[S]) {
    put_uvarint(buf, values.len() as u64);
    for value in values {
        let value: &str = value.as_ref();
        put_bytes(buf, value.as_bytes());
    }
}

/// Count-prefixed list of big-endian `u16`.
pub fn put_u16_list(buf: &mut BytesMut, values: &[u16]) {
    put_uvarint(buf, values.len() as u64);
    for &value in values {
        buf.put_u16(value);
    }
}

/// Count-prefixed list of big-endian `u64`.
pub fn put_u64_list(buf: &mut BytesMut, values: &[u64]) {
    put_uvarint(buf, values.len() as u64);
    for &value in values {
        buf.put_u64(value);
    }
}
