use super::DelimitedSpan;

/// Bold span: `**text**` renders as `<b>text</b>`.
pub struct Bold;

impl DelimitedSpan for Bold {
    const DELIM: &'static [u8] = b"**";
    const OPEN: &'static str = "<b>";
    const CLOSE: &'static str = "</b>";
}
