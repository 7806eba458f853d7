use crate::vle::{unicode::*, VariableLengthEncoding};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Utf16Type {
    Bmp(u16),
    Surrogate { data: [u16; 2], is_complete: bool },
}

/// How a code unit (or pair of code units) at the head of a UTF-16 slice
/// decodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitClass {
    /// A unit outside the surrogate range that is a scalar value by itself.
    Ordinary,
    /// A lead surrogate immediately followed by a trail surrogate.
    Pair,
    /// A lone lead or trail surrogate. Decodes to U+FFFD.
    Invalid,
}

/// One decoded step of a UTF-16 slice: a single unit, or a surrogate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf16Sequence(Utf16Type);

impl VariableLengthEncoding for Utf16Sequence {
    type Point = u16;

    #[inline]
    fn build(point: Self::Point) -> Option<Self> {
        let data = if is_lead_surrogate(point) {
            Utf16Type::Surrogate {
                data: [point, 0],
                is_complete: false,
            }
        } else {
            Utf16Type::Bmp(point)
        };
        Some(Self(data))
    }

    #[inline]
    fn is_complete(&self) -> bool {
        match self.0 {
            Utf16Type::Bmp(_) => true,
            Utf16Type::Surrogate { is_complete, .. } => is_complete,
        }
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        match self.0 {
            Utf16Type::Bmp(_) => false,
            Utf16Type::Surrogate {
                ref mut data,
                ref mut is_complete,
            } => {
                if *is_complete || !is_trail_surrogate(point) {
                    false
                } else {
                    data[1] = point;
                    *is_complete = true;
                    true
                }
            }
        }
    }

    #[inline]
    fn is_valid(&self) -> bool {
        match self.0 {
            Utf16Type::Bmp(unit) => !is_surrogate(unit as u32),
            Utf16Type::Surrogate { is_complete, .. } => is_complete,
        }
    }
}

impl Utf16Sequence {
    pub fn class(&self) -> UnitClass {
        match self.0 {
            Utf16Type::Bmp(unit) if !is_surrogate(unit as u32) => UnitClass::Ordinary,
            Utf16Type::Surrogate {
                is_complete: true, ..
            } => UnitClass::Pair,
            _ => UnitClass::Invalid,
        }
    }

    /// The scalar value this sequence decodes to, U+FFFD when invalid.
    #[inline]
    pub fn to_char(self) -> char {
        match self.0 {
            Utf16Type::Bmp(unit) => codepoint_to_char(unit as u32),
            Utf16Type::Surrogate {
                data: [lead, trail],
                is_complete: true,
            } => codepoint_to_char(combine_surrogates(lead, trail)),
            Utf16Type::Surrogate { .. } => REPLACEMENT_CHARACTER,
        }
    }

    /// Number of code units consumed from the input.
    #[inline]
    pub fn unit_len(&self) -> usize {
        match self.0 {
            Utf16Type::Surrogate {
                is_complete: true, ..
            } => 2,
            _ => 1,
        }
    }

    /// Number of bytes the decoded scalar value occupies in UTF-8.
    #[inline]
    pub fn utf8_len(&self) -> usize {
        self.to_char().len_utf8()
    }

    /// The first unit of the sequence, i.e. the offending unit when invalid.
    pub fn first_unit(&self) -> u16 {
        match self.0 {
            Utf16Type::Bmp(unit) => unit,
            Utf16Type::Surrogate { data, .. } => data[0],
        }
    }
}

/// Classifies the code unit at the start of `units`, pairing it with the
/// following unit when they form a surrogate pair. Returns the sequence along
/// with the units that remain, or `None` if `units` is empty.
pub fn next_sequence(units: &[u16]) -> Option<(Utf16Sequence, &[u16])> {
    let (first, rest) = units.split_first()?;
    let mut sequence = Utf16Sequence::build(*first)?;

    match rest.split_first() {
        Some((next, tail)) if !sequence.is_complete() && sequence.add_point(*next) => {
            Some((sequence, tail))
        }
        _ => Some((sequence, rest)),
    }
}

/// Iterator over the [`Utf16Sequence`]s of a slice of code units, left to
/// right.
#[derive(Clone, Debug)]
pub struct Utf16Sequences<'a> {
    remaining: &'a [u16],
}

impl<'a> Utf16Sequences<'a> {
    pub fn new(units: &'a [u16]) -> Self {
        Self { remaining: units }
    }
}

impl Iterator for Utf16Sequences<'_> {
    type Item = Utf16Sequence;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (sequence, rest) = next_sequence(self.remaining)?;
        self.remaining = rest;
        Some(sequence)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len();
        (len.div_ceil(2), Some(len))
    }
}

impl std::iter::FusedIterator for Utf16Sequences<'_> {}
