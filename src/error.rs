//! Provides [`CapacityError`], the one way a conversion can fail.

/// A caller-supplied destination buffer was too small to hold the output of a
/// conversion.
///
/// Nothing is written for the element that did not fit. `written` reports how
/// much of the destination was filled before that element, so the caller can
/// tell exactly how far the conversion got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    written: usize,
    required: usize,
    available: usize,
}

impl CapacityError {
    pub(crate) fn new(required: usize, available: usize) -> Self {
        Self {
            written: 0,
            required,
            available,
        }
    }

    /// Offsets an error raised partway through a destination by the amount
    /// written before the point it was raised at.
    pub(crate) fn after(self, written: usize) -> Self {
        Self {
            written: self.written + written,
            ..self
        }
    }

    /// Slots filled before the element that did not fit.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Slots the element that did not fit needed.
    pub fn required(&self) -> usize {
        self.required
    }

    /// Slots that were left in the destination for that element.
    pub fn available(&self) -> usize {
        self.available
    }
}

impl std::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Destination buffer too small: {} more required but only {} \
             available after writing {}",
            self.required, self.available, self.written
        )
    }
}

impl std::error::Error for CapacityError {}
