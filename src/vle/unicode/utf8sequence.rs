use std::ops::RangeInclusive;

use crate::vle::{unicode::*, VariableLengthEncoding};

pub(crate) struct Utf8Sequence {
    full_length: u8,
    current_length: u8,
    bytes: [u8; 4],
}

impl VariableLengthEncoding for Utf8Sequence {
    type Point = u8;

    #[inline]
    fn build(byte: Self::Point) -> Option<Self> {
        let full_length = match byte.leading_ones() {
            0 => 1,
            n @ 2..=4 => n,
            _ => return None,
        } as u8;
        if Self::is_invalid(byte) {
            return None;
        }
        Some(Self {
            full_length,
            current_length: 1,
            bytes: [byte, 0, 0, 0],
        })
    }

    #[inline]
    fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        if self.is_complete() {
            return false;
        }
        let allowed = if self.current_length == 1 {
            Self::second_byte_range(self.bytes[0])
        } else {
            0x80..=0xBF
        };
        if !allowed.contains(&point) {
            return false;
        }
        self.bytes[self.current_length as usize] = point;
        self.current_length += 1;
        true
    }

    #[inline]
    fn is_valid(&self) -> bool {
        self.is_complete() && char::from_u32(self.get_codepoint()).is_some()
    }
}

impl Utf8Sequence {
    #[inline]
    fn get_codepoint(&self) -> u32 {
        let mut codepoint = match self.full_length {
            1 => return self.bytes[0] as u32,
            2 => self.bytes[0] ^ 0b1100_0000,
            3 => self.bytes[0] ^ 0b1110_0000,
            _ => self.bytes[0] ^ 0b1111_0000,
        } as u32;
        for i in 1..self.current_length as usize {
            codepoint = (codepoint << 6) | ((self.bytes[i] ^ 0b10_000000) as u32);
        }
        codepoint
    }

    #[inline]
    fn to_char(&self) -> char {
        if self.is_valid() {
            codepoint_to_char(self.get_codepoint())
        } else {
            REPLACEMENT_CHARACTER
        }
    }

    // Narrowing the second byte rules out overlong forms, surrogates and
    // values above U+10FFFF as early as possible, so an invalid sequence is
    // cut at its maximal subpart.
    const fn second_byte_range(lead: u8) -> RangeInclusive<u8> {
        match lead {
            0xE0 => 0xA0..=0xBF,
            0xED => 0x80..=0x9F,
            0xF0 => 0x90..=0xBF,
            0xF4 => 0x80..=0x8F,
            _ => 0x80..=0xBF,
        }
    }

    const fn is_invalid(byte: u8) -> bool {
        matches!(byte, 0xC0 | 0xC1 | 0xF5..)
    }
}

/// Decodes the next scalar value from the given UTF-8 bytes, returning it
/// along with the bytes that follow.
///
/// Malformed input yields U+FFFD once per maximal subpart: a lead byte and
/// however many continuation bytes could still have begun a valid sequence.
/// Decoding resumes at the first byte that was not accepted.
///
/// Returns `None` if `bytes` is empty.
pub fn decode_next_codepoint(bytes: &[u8]) -> Option<(char, &[u8])> {
    let (first, mut rest) = bytes.split_first()?;

    let Some(mut sequence) = Utf8Sequence::build(*first) else {
        log::trace!("replacing invalid UTF-8 lead byte {:#04x}", first);
        return Some((REPLACEMENT_CHARACTER, rest));
    };

    while !sequence.is_complete() {
        match rest.split_first() {
            Some((byte, tail)) if sequence.add_point(*byte) => rest = tail,
            _ => {
                log::trace!(
                    "replacing truncated UTF-8 sequence of {} byte(s)",
                    sequence.current_length
                );
                return Some((REPLACEMENT_CHARACTER, rest));
            }
        }
    }

    Some((sequence.to_char(), rest))
}

/// Iterator over the scalar values of a UTF-8 byte slice, substituting U+FFFD
/// for malformed input.
#[derive(Clone, Debug)]
pub struct Utf8Chars<'a> {
    remaining: &'a [u8],
}

impl<'a> Utf8Chars<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { remaining: bytes }
    }
}

impl Iterator for Utf8Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (char, rest) = decode_next_codepoint(self.remaining)?;
        self.remaining = rest;
        Some(char)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len();
        (len.div_ceil(4), Some(len))
    }
}

impl std::iter::FusedIterator for Utf8Chars<'_> {}
