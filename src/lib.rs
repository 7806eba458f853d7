//! Conversions between UTF-16 code units, UTF-8 bytes and Unicode scalar
//! values.
//!
//! Every conversion comes in two parts: a sizer that reports the exact output
//! length, and an encoder or decoder that fills a buffer of that length.
//!
//! ```
//! let units = [0x0048, 0xD83D, 0xDE00, 0xD800];
//!
//! let mut bytes = vec![0; utfconv::utf8_len(&units)];
//! let written = utfconv::decode_utf16_into(&mut bytes, &units).unwrap();
//! assert_eq!(&bytes[..written], "H😀\u{FFFD}".as_bytes());
//!
//! let mut encoded = vec![0; utfconv::utf16_len_of_str("H😀")];
//! assert_eq!(utfconv::encode_str(&mut encoded, "H😀"), Ok(3));
//! assert_eq!(encoded, [0x0048, 0xD83D, 0xDE00]);
//! ```
//!
//! Malformed input never fails: lone surrogates and malformed UTF-8 are
//! replaced by U+FFFD. The only error is a destination buffer that is too
//! small, reported as a [`CapacityError`].

mod bytes;
mod decode;
mod encode;
mod error;
mod sizer;
mod vle;

pub use bytes::{
    decode_utf16_bytes, decode_utf16_bytes_with_bom, encode_str_to_bytes, units_from_bytes,
};
pub use decode::{decode_utf16, decode_utf16_into, decode_utf16_to_string};
pub use encode::{
    encode_chars, encode_scalar, encode_str, encode_str_to_vec, encode_utf8, encode_utf8_to_vec,
};
pub use error::CapacityError;
pub use sizer::{
    utf16_len_of_chars, utf16_len_of_scalar, utf16_len_of_str, utf16_len_of_utf8, utf8_len,
};
pub use vle::unicode::utf16sequence::{next_sequence, UnitClass, Utf16Sequence, Utf16Sequences};
pub use vle::unicode::utf8sequence::{decode_next_codepoint, Utf8Chars};
pub use vle::unicode::{
    combine_surrogates, is_lead_surrogate, is_surrogate, is_trail_surrogate,
    split_supplementary, Endianness, MAX_SCALAR, REPLACEMENT_CHARACTER,
};
pub use vle::VariableLengthEncoding;
