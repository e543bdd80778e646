use core::ops;

/// A span over bytes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Span {
    /// The byte index of the start of the span.
    pub start: usize,
    /// The number of bytes in the span.
    pub length: usize,
}

impl Span {
    /// Create a span covering `start..end`.
    ///
    /// # Panics
    /// This function will panic if `end` is before `start`.
    #[must_use]
    pub const fn between(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "the ending byte offset can't be before the start of a span."
        );
        Self {
            start,
            length: end - start,
        }
    }

    /// Convert the span into a range.
    #[must_use]
    pub const fn range(self) -> ops::Range<usize> {
        self.start..self.end()
    }

    /// Return the end index.
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.length
    }

    /// Check if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }
}
