//! Encoding of scalar values, supplied one at a time, as a native string, or
//! as UTF-8 bytes, to UTF-16.

use crate::error::CapacityError;
use crate::sizer::{utf16_len_of_str, utf16_len_of_utf8};
use crate::vle::unicode::{
    split_supplementary, utf8sequence::Utf8Chars, MAX_SCALAR, REPLACEMENT_CHARACTER,
};

/// The code units for `rune`, and how many of them are used.
#[inline]
fn scalar_units(rune: u32) -> ([u16; 2], usize) {
    match rune {
        0..=0xD7FF | 0xE000..=0xFFFF => ([rune as u16, 0], 1),
        0x10000..=MAX_SCALAR => (split_supplementary(rune), 2),
        _ => {
            log::trace!("replacing invalid rune {:#x} with U+FFFD", rune);
            ([REPLACEMENT_CHARACTER as u16, 0], 1)
        }
    }
}

#[inline]
fn write_scalar(dst: &mut [u16], rune: u32) -> Result<usize, CapacityError> {
    let (units, len) = scalar_units(rune);
    if dst.len() < len {
        return Err(CapacityError::new(len, dst.len()));
    }

    dst[..len].copy_from_slice(&units[..len]);
    Ok(len)
}

/// Encodes a single rune into the start of `dst`, returning the number of
/// code units written.
///
/// Scalar values below U+10000 take one unit and supplementary ones take a
/// lead and a trail surrogate. Anything that isn't a scalar value (a
/// surrogate, or a value above U+10FFFF) is written as a single U+FFFD.
///
/// A `dst` of two units always suffices. If `dst` is shorter than the rune
/// needs then nothing is written and an error is returned.
pub fn encode_scalar(dst: &mut [u16], rune: u32) -> Result<usize, CapacityError> {
    write_scalar(dst, rune).inspect_err(|error| {
        log::debug!("UTF-16 encode of {:#x} failed: {}", rune, error);
    })
}

/// Encodes every scalar value of `chars`, in order, into `dst`, returning the
/// total number of code units written.
///
/// Size `dst` with [`utf16_len_of_chars`](crate::utf16_len_of_chars) first.
/// If it runs out, encoding stops at the scalar value that did not fit and an
/// error reporting the progress made is returned.
pub fn encode_chars<I>(dst: &mut [u16], chars: I) -> Result<usize, CapacityError>
where
    I: IntoIterator<Item = char>,
{
    let mut written = 0;

    for char in chars {
        written += write_scalar(&mut dst[written..], char as u32)
            .map_err(|error| error.after(written))
            .inspect_err(|error| log::debug!("UTF-16 encode stopped: {}", error))?;
    }

    Ok(written)
}

/// Encodes `src` into `dst`. See [`encode_chars`].
pub fn encode_str(dst: &mut [u16], src: &str) -> Result<usize, CapacityError> {
    encode_chars(dst, src.chars())
}

/// Encodes the scalar values decoded from the UTF-8 bytes `src` into `dst`.
/// Malformed UTF-8 is encoded as U+FFFD. See [`encode_chars`].
///
/// All of `src` is consumed unless `dst` is too small, in which case an error
/// is returned rather than a silently truncated result.
pub fn encode_utf8(dst: &mut [u16], src: &[u8]) -> Result<usize, CapacityError> {
    encode_chars(dst, Utf8Chars::new(src))
}

/// Encodes `src` to a newly allocated vector of code units.
pub fn encode_str_to_vec(src: &str) -> Vec<u16> {
    collect_units(src.chars(), utf16_len_of_str(src))
}

/// Encodes the scalar values decoded from the UTF-8 bytes `src` to a newly
/// allocated vector of code units.
pub fn encode_utf8_to_vec(src: &[u8]) -> Vec<u16> {
    collect_units(Utf8Chars::new(src), utf16_len_of_utf8(src))
}

fn collect_units(chars: impl Iterator<Item = char>, len: usize) -> Vec<u16> {
    let mut units = Vec::with_capacity(len);

    for char in chars {
        let (buffer, n) = scalar_units(char as u32);
        units.extend_from_slice(&buffer[..n]);
    }

    units
}
