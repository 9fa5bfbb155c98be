//! # Inline Kinds
//!
//! Inline span types that own their syntax delimiters and HTML wrappers.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = b"**"`, wraps in `<b>`
//! - **`Emphasis`**: `DELIM = b"__"`, wraps in `<em>`
//!
//! The scanner in `parser` only ever reads these constants; it never
//! hardcodes `**` or `__`.

pub mod bold;
pub mod emphasis;

pub use bold::Bold;
pub use emphasis::Emphasis;

/// A span delimited by the same literal pair on both sides.
pub trait DelimitedSpan {
    /// Opening and closing delimiter (identical).
    const DELIM: &'static [u8];
    /// HTML emitted in place of the opening delimiter.
    const OPEN: &'static str;
    /// HTML emitted in place of the closing delimiter.
    const CLOSE: &'static str;
}
