//! UTF-16 held as raw bytes in a declared byte order, e.g. the contents of a
//! UTF-16LE or UTF-16BE file.

use itertools::Itertools;

use crate::decode::decode_utf16_to_string;
use crate::encode::encode_str_to_vec;
use crate::vle::unicode::{Endianness, REPLACEMENT_CHARACTER};

/// Reads consecutive byte pairs of `bytes` as code units. A dangling final
/// byte is not yielded.
pub fn units_from_bytes(
    bytes: &[u8],
    endianness: Endianness,
) -> impl Iterator<Item = u16> + '_ {
    bytes
        .iter()
        .copied()
        .tuples()
        .map(move |(b0, b1)| endianness.bytes_to_u16([b0, b1]))
}

/// Decodes UTF-16 bytes in the given byte order to a native string. Lone
/// surrogates, and a dangling final byte, each decode to U+FFFD.
pub fn decode_utf16_bytes(bytes: &[u8], endianness: Endianness) -> String {
    let units = units_from_bytes(bytes, endianness).collect_vec();
    let mut s = decode_utf16_to_string(&units);

    if bytes.len() % 2 != 0 {
        log::trace!("replacing dangling UTF-16 byte with U+FFFD");
        s.push(REPLACEMENT_CHARACTER);
    }

    s
}

/// Decodes UTF-16 bytes whose byte order is declared by a leading byte order
/// mark. The mark is not part of the result. Without a mark, `fallback` is
/// used.
pub fn decode_utf16_bytes_with_bom(bytes: &[u8], fallback: Endianness) -> String {
    match Endianness::from_bom(bytes) {
        Some((endianness, rest)) => decode_utf16_bytes(rest, endianness),
        None => decode_utf16_bytes(bytes, fallback),
    }
}

/// Encodes `src` to UTF-16 bytes in the given byte order, without a byte
/// order mark.
pub fn encode_str_to_bytes(src: &str, endianness: Endianness) -> Vec<u8> {
    encode_str_to_vec(src)
        .into_iter()
        .flat_map(|unit| endianness.u16_to_bytes(unit))
        .collect()
}
