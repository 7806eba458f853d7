//! UTF-16 to UTF-8 decoding.
//!
//! Decoding is total: every sequence of code units decodes, with each lone
//! surrogate replaced by U+FFFD.

use crate::error::CapacityError;
use crate::sizer::utf8_len;
use crate::vle::unicode::utf16sequence::{UnitClass, Utf16Sequence, Utf16Sequences};

/// Decodes `units` to UTF-8 bytes. The result is always exactly
/// [`utf8_len(units)`](utf8_len) bytes long and is always valid UTF-8.
pub fn decode_utf16(units: &[u16]) -> Vec<u8> {
    decode_utf16_to_string(units).into_bytes()
}

/// Decodes `units` to a native string.
pub fn decode_utf16_to_string(units: &[u16]) -> String {
    let mut s = String::with_capacity(utf8_len(units));

    for sequence in Utf16Sequences::new(units) {
        s.push(checked_char(&sequence));
    }

    s
}

/// Decodes `units` into `dst`, returning the number of bytes written.
///
/// `dst` should be sized with [`utf8_len`]. If it is too small, decoding stops
/// at the first scalar value that does not fit and nothing of that value is
/// written.
pub fn decode_utf16_into(dst: &mut [u8], units: &[u16]) -> Result<usize, CapacityError> {
    let mut written = 0;

    for sequence in Utf16Sequences::new(units) {
        let char = checked_char(&sequence);
        let remaining = &mut dst[written..];

        if remaining.len() < char.len_utf8() {
            let error = CapacityError::new(char.len_utf8(), remaining.len()).after(written);
            log::debug!("UTF-16 decode stopped: {}", error);
            return Err(error);
        }

        written += char.encode_utf8(remaining).len();
    }

    Ok(written)
}

#[inline]
fn checked_char(sequence: &Utf16Sequence) -> char {
    if sequence.class() == UnitClass::Invalid {
        log::trace!(
            "replacing lone surrogate {:#06x} with U+FFFD",
            sequence.first_unit()
        );
    }
    sequence.to_char()
}
