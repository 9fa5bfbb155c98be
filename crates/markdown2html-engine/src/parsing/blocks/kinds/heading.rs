/// ATX-style heading with owned marker constants.
///
/// All heading syntax knowledge lives here, not in the classifier.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level; longer marker runs are clamped to it.
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading marker at column 0.
    ///
    /// The marker is a run of `#` followed by whitespace or end of line.
    /// Indented lines and `#tag` style words are not headings.
    ///
    /// # Returns
    /// - `level`: Marker run length clamped to `1..=MAX_LEVEL`
    /// - `content`: Everything after the marker run, trimmed
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let run = line.len() - line.trim_start_matches(Self::MARKER).len();
        if run == 0 {
            return None;
        }
        let rest = &line[run..];
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let level = u8::try_from(run)
            .unwrap_or(Self::MAX_LEVEL)
            .min(Self::MAX_LEVEL);
        Some((level, rest.trim()))
    }

    /// Renders a heading as a single `<hN>...</hN>` line.
    pub fn render(level: u8, content: &str) -> String {
        format!("<h{level}>{content}</h{level}>")
    }
}
