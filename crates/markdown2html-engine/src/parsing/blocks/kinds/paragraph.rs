/// Paragraph block type.
///
/// Paragraphs have no marker - they are what any non-blank line becomes
/// when nothing else matches. Lines inside one paragraph are separated by a
/// break marker; the last line never carries one.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>";
    /// Appended to every paragraph line that is followed by another.
    pub const BREAK: &'static str = "<br/>";

    /// Renders one content line, with or without the trailing break marker.
    pub fn render_line(content: &str, trailing_break: bool) -> String {
        if trailing_break {
            format!("{content}{}", Self::BREAK)
        } else {
            content.to_string()
        }
    }
}
