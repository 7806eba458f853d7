//! Exact output lengths of conversions, computed without producing the
//! output, so buffers can be sized before encoding or decoding into them.

use crate::vle::unicode::{
    utf16sequence::Utf16Sequences, utf8sequence::Utf8Chars, MAX_SCALAR, SUPPLEMENTARY_START,
};

/// Number of bytes [`decode_utf16`](crate::decode_utf16) produces for
/// `units`. Each lone surrogate counts as the three bytes of U+FFFD.
pub fn utf8_len(units: &[u16]) -> usize {
    Utf16Sequences::new(units).map(|s| s.utf8_len()).sum()
}

/// Number of code units [`encode_scalar`](crate::encode_scalar) writes for
/// `rune`: two for a supplementary scalar value, one for everything else,
/// including invalid runes that are replaced by U+FFFD.
#[inline]
pub const fn utf16_len_of_scalar(rune: u32) -> usize {
    if rune < SUPPLEMENTARY_START || rune > MAX_SCALAR {
        1
    } else {
        2
    }
}

/// Number of code units needed to encode every scalar value in `chars`.
pub fn utf16_len_of_chars<I>(chars: I) -> usize
where
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .map(|c| utf16_len_of_scalar(c as u32))
        .sum()
}

/// Number of code units [`encode_str`](crate::encode_str) writes for `src`.
pub fn utf16_len_of_str(src: &str) -> usize {
    utf16_len_of_chars(src.chars())
}

/// Number of code units [`encode_utf8`](crate::encode_utf8) writes for
/// `src`. Malformed UTF-8 is counted as the U+FFFD it decodes to.
pub fn utf16_len_of_utf8(src: &[u8]) -> usize {
    utf16_len_of_chars(Utf8Chars::new(src))
}
