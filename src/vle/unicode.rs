pub(crate) mod utf16sequence;
pub(crate) mod utf8sequence;

/// U+FFFD, substituted for every structurally invalid piece of input.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// The largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10FFFF;

// 0xD800..0xDC00 carries the high 10 bits of a pair, 0xDC00..0xE000 the low
// 10 bits. The pair encodes those 20 bits plus 0x10000.
pub const LEAD_SURROGATE_START: u16 = 0xD800;
pub const TRAIL_SURROGATE_START: u16 = 0xDC00;
pub const SUPPLEMENTARY_START: u32 = 0x10000;

#[inline]
pub const fn is_lead_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
pub const fn is_trail_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Whether `value` lies in the surrogate range, which is never a scalar
/// value on its own.
#[inline]
pub const fn is_surrogate(value: u32) -> bool {
    matches!(value, 0xD800..=0xDFFF)
}

/// Joins a lead and a trail surrogate into the supplementary scalar value
/// they encode. Both arguments must already be known to be surrogates of the
/// right kind.
#[inline]
pub const fn combine_surrogates(lead: u16, trail: u16) -> u32 {
    (((lead - LEAD_SURROGATE_START) as u32) << 10)
        + (trail - TRAIL_SURROGATE_START) as u32
        + SUPPLEMENTARY_START
}

/// Splits a supplementary scalar value (`0x10000..=0x10FFFF`) into its lead
/// and trail surrogates, in that order.
#[inline]
pub const fn split_supplementary(scalar: u32) -> [u16; 2] {
    let bits = scalar - SUPPLEMENTARY_START;
    [
        LEAD_SURROGATE_START + (bits >> 10) as u16,
        TRAIL_SURROGATE_START + (bits & 0x3FF) as u16,
    ]
}

/// Converts an integer codepoint to a `char`, falling back to the
/// replacement character when it isn't a scalar value.
#[inline]
pub fn codepoint_to_char(codepoint: u32) -> char {
    char::from_u32(codepoint).unwrap_or(REPLACEMENT_CHARACTER)
}

/// Order of the two bytes of a code unit when UTF-16 is held as bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    /// The byte order of the current target.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::BigEndian
        } else {
            Endianness::LittleEndian
        }
    }

    /// Detects a leading byte order mark, returning the order it declares and
    /// the bytes that follow it.
    pub fn from_bom(bytes: &[u8]) -> Option<(Self, &[u8])> {
        match bytes {
            [0xFE, 0xFF, rest @ ..] => Some((Endianness::BigEndian, rest)),
            [0xFF, 0xFE, rest @ ..] => Some((Endianness::LittleEndian, rest)),
            _ => None,
        }
    }

    #[inline]
    pub const fn bytes_to_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => u16::from_be_bytes(bytes),
            Endianness::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub const fn u16_to_bytes(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        }
    }
}
