use super::DelimitedSpan;

/// Emphasis span: `__text__` renders as `<em>text</em>`.
pub struct Emphasis;

impl DelimitedSpan for Emphasis {
    const DELIM: &'static [u8] = b"__";
    const OPEN: &'static str = "<em>";
    const CLOSE: &'static str = "</em>";
}
