//! # Inline Substitution
//!
//! Single-line, cursor-based replacement of delimiter pairs with inline HTML.
//!
//! ## Architecture
//!
//! Each span kind gets its own left-to-right pass over the line. Bold runs
//! before emphasis, so `__x__` inside an already-bolded span is still
//! rewritten by the second pass. Nothing matches across lines.
//!
//! ## Modules
//!
//! - **`kinds`**: `DelimitedSpan` and its implementors (`Bold`, `Emphasis`)
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `substitute()` entry point and the generic `replace_pairs()`
//!
//! ## Unmatched Delimiters
//!
//! An opener with no closer on the same line is not an error: its characters
//! pass through untouched.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::{replace_pairs, substitute};
