use crate::parsing::{RenderOptions, inline, rope::lines::LineRef};

use super::{
    kinds::{Heading, ListItem, ListKind},
    types::{LineEvent, LineKind},
};

/// Classifies individual lines for the block builder.
///
/// Each line is classified independently, without reference to the lines
/// around it. All block context lives in `BlockBuilder`.
pub struct MarkdownLineClassifier {
    inline_in_headings: bool,
}

impl MarkdownLineClassifier {
    pub fn new(opts: &RenderOptions) -> Self {
        Self {
            inline_in_headings: opts.inline_in_headings,
        }
    }

    /// Classifies a raw line into a [`LineEvent`].
    ///
    /// Precedence: heading (column 0 only), list item (after leading
    /// whitespace), blank, text.
    pub fn classify(&self, lr: &LineRef) -> LineEvent {
        let (kind, content) = self.classify_text(&lr.text);
        LineEvent {
            line: lr.span,
            kind,
            content,
        }
    }

    fn classify_text(&self, raw: &str) -> (LineKind, String) {
        let line = raw.trim_end_matches(['\r', '\n']);

        if let Some((level, content)) = Heading::parse(line) {
            let content = if self.inline_in_headings {
                inline::substitute(content)
            } else {
                content.to_string()
            };
            return (LineKind::Heading { level }, content);
        }

        let stripped = line.trim_start();
        if let Some((list, rest)) = ListItem::parse(stripped) {
            let kind = match list {
                ListKind::Unordered => LineKind::UnorderedItem,
                ListKind::Ordered => LineKind::OrderedItem,
            };
            return (kind, inline::substitute(rest.trim()));
        }

        let stripped = stripped.trim_end();
        if stripped.is_empty() {
            return (LineKind::Blank, String::new());
        }

        (LineKind::Text, inline::substitute(stripped))
    }
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::span::Span;
    use rstest::rstest;

    fn line(text: &str) -> LineRef {
        LineRef {
            span: Span {
                start: 0,
                end: text.len(),
            },
            text: text.to_string(),
        }
    }

    #[rstest]
    #[case("# Title\n", LineKind::Heading { level: 1 }, "Title")]
    #[case("###   Spaced   \n", LineKind::Heading { level: 3 }, "Spaced")]
    #[case("######### Deep\n", LineKind::Heading { level: 6 }, "Deep")]
    #[case("- item\n", LineKind::UnorderedItem, "item")]
    #[case("   - indented item  \n", LineKind::UnorderedItem, "indented item")]
    #[case("* first\n", LineKind::OrderedItem, "first")]
    #[case("\n", LineKind::Blank, "")]
    #[case("   \t \r\n", LineKind::Blank, "")]
    #[case("  hello  \n", LineKind::Text, "hello")]
    #[case("#hashtag\n", LineKind::Text, "#hashtag")]
    #[case("  # indented hash\n", LineKind::Text, "# indented hash")]
    #[case("**bold** start\n", LineKind::Text, "<b>bold</b> start")]
    #[case("-no space\n", LineKind::Text, "-no space")]
    #[case("no newline", LineKind::Text, "no newline")]
    fn classify_cases(#[case] raw: &str, #[case] kind: LineKind, #[case] content: &str) {
        let ev = MarkdownLineClassifier::default().classify(&line(raw));
        assert_eq!(ev.kind, kind);
        assert_eq!(ev.content, content);
    }

    #[test]
    fn list_items_get_inline_substitution() {
        let c = MarkdownLineClassifier::default();
        assert_eq!(c.classify(&line("- **a** __b__\n")).content, "<b>a</b> <em>b</em>");
        assert_eq!(c.classify(&line("* __x__\n")).content, "<em>x</em>");
    }

    #[test]
    fn headings_are_verbatim_by_default() {
        let ev = MarkdownLineClassifier::default().classify(&line("# A **b**\n"));
        assert_eq!(ev.content, "A **b**");
    }

    #[test]
    fn headings_substituted_when_enabled() {
        let opts = RenderOptions {
            inline_in_headings: true,
            ..RenderOptions::default()
        };
        let ev = MarkdownLineClassifier::new(&opts).classify(&line("# A **b**\n"));
        assert_eq!(ev.content, "A <b>b</b>");
    }

    #[test]
    fn event_keeps_source_span() {
        let lr = LineRef {
            span: Span { start: 10, end: 16 },
            text: "- abc\n".to_string(),
        };
        let ev = MarkdownLineClassifier::default().classify(&lr);
        assert_eq!(ev.line, Span { start: 10, end: 16 });
    }
}
