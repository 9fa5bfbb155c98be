/// A byte range `[start, end)` into the rope.
///
/// Line events keep the span of the source line they came from, so
/// diagnostics can point back at the exact input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}
