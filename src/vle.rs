pub(crate) mod unicode;

/// Incremental assembly of one scalar value from the code units of a
/// variable-length encoding.
///
/// A sequence is started from its first unit with [`build`], fed further
/// units with [`add_point`] until [`is_complete`], and finally checked with
/// [`is_valid`].
///
/// [`build`]: VariableLengthEncoding::build
/// [`add_point`]: VariableLengthEncoding::add_point
/// [`is_complete`]: VariableLengthEncoding::is_complete
/// [`is_valid`]: VariableLengthEncoding::is_valid
pub trait VariableLengthEncoding: Sized {
    type Point;

    /// Starts a sequence, or returns `None` if `input` can never begin one.
    fn build(input: Self::Point) -> Option<Self>;
    fn is_complete(&self) -> bool;
    /// Appends `point`, returning `false` (and leaving the sequence
    /// untouched) if it cannot continue the sequence.
    fn add_point(&mut self, point: Self::Point) -> bool;
    fn is_valid(&self) -> bool;
}
