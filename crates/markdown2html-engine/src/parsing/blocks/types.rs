use crate::parsing::rope::span::Span;

use super::kinds::ListKind;

/// The semantic kind of a single classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A heading; `level` is already clamped to `1..=6`.
    Heading { level: u8 },
    /// A `- ` item.
    UnorderedItem,
    /// A `* ` item.
    OrderedItem,
    /// Whitespace only.
    Blank,
    /// Anything else; becomes paragraph content.
    Text,
}

impl LineKind {
    /// The list a line of this kind belongs to, if it is a list item.
    pub fn list_kind(self) -> Option<ListKind> {
        match self {
            LineKind::UnorderedItem => Some(ListKind::Unordered),
            LineKind::OrderedItem => Some(ListKind::Ordered),
            _ => None,
        }
    }
}

/// A classified line, ready for the block builder.
///
/// Created by the classifier and consumed immediately; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEvent {
    /// Byte span of the source line in the rope.
    pub line: Span,
    pub kind: LineKind,
    /// Marker-free, trimmed content with inline substitution already applied
    /// (headings only when enabled). Empty for blank lines.
    pub content: String,
}

/// Which block-level container is currently open.
///
/// At most one container is open at a time; lists and paragraphs never nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    None,
    UnorderedList,
    OrderedList,
    Paragraph,
}
