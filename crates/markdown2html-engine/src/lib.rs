pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{HtmlDoc, RenderOptions, convert_document, convert_str};
