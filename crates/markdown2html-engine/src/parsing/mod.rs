pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod rope;


use xi_rope::Rope;

use blocks::{BlockBuilder, MarkdownLineClassifier};
use rope::lines_with_spans;

/// Dialect choices that differ between historical variants of the format.
///
/// `Default` is the documented dialect: headings verbatim, blank lines keep
/// lists open, no trailing newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Apply `**`/`__` substitution to heading content too.
    pub inline_in_headings: bool,
    /// End an open list on a blank line instead of only on other blocks.
    pub blank_line_closes_list: bool,
    /// Terminate the serialized document with `\n`.
    pub trailing_newline: bool,
}

/// The converted document: one entry per output line, no terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlDoc {
    pub lines: Vec<String>,
}

impl HtmlDoc {
    /// Joins the lines with `\n`. With `trailing_newline`, a non-empty
    /// document also gets a final `\n`.
    pub fn to_html(&self, trailing_newline: bool) -> String {
        let mut html = self.lines.join("\n");
        if trailing_newline && !self.lines.is_empty() {
            html.push('\n');
        }
        html
    }
}

/// Converts a whole document in one pass over its lines.
///
/// Every line goes through the classifier and then the block builder, in
/// input order; anything still open at the end is closed.
pub fn convert_document(rope: &Rope, opts: &RenderOptions) -> HtmlDoc {
    let classifier = MarkdownLineClassifier::new(opts);
    let mut builder =
        BlockBuilder::new().with_blank_line_closes_list(opts.blank_line_closes_list);

    let mut count = 0usize;
    for lr in lines_with_spans(rope) {
        let ev = classifier.classify(&lr);
        builder.push(&ev);
        count += 1;
    }

    let lines = builder.finish();
    log::debug!("converted {count} input lines into {} html lines", lines.len());
    HtmlDoc { lines }
}

/// Convenience: convert markdown held in a string.
pub fn convert_str(markdown: &str, opts: &RenderOptions) -> HtmlDoc {
    convert_document(&Rope::from(markdown), opts)
}
