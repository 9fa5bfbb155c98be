/// List flavour, selected by the item marker.
///
/// This dialect uses `- ` for unordered items and `* ` for ordered items;
/// `*` is a list marker here, not emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// Item marker, including its required trailing space.
    pub const fn marker(self) -> &'static str {
        match self {
            ListKind::Unordered => "- ",
            ListKind::Ordered => "* ",
        }
    }

    pub const fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub const fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// List item marker detection and rendering.
pub struct ListItem;

impl ListItem {
    /// Detects a list item marker on a line whose leading whitespace has
    /// already been stripped, returning the list kind and the remainder.
    pub fn parse(stripped: &str) -> Option<(ListKind, &str)> {
        [ListKind::Unordered, ListKind::Ordered]
            .into_iter()
            .find_map(|kind| stripped.strip_prefix(kind.marker()).map(|rest| (kind, rest)))
    }

    pub fn render(content: &str) -> String {
        format!("<li>{content}</li>")
    }
}
