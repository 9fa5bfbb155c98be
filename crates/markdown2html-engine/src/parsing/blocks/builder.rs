use super::{
    kinds::{Heading, ListItem, ListKind, Paragraph},
    types::{BlockState, LineEvent, LineKind},
};

/// Open container plus whatever it still has to flush.
#[derive(Debug, Clone)]
enum OpenBlock {
    None,
    List(ListKind),
    /// `last` is the newest paragraph line. Whether it gets a break marker
    /// is only known once the next line (or the close) arrives.
    Paragraph { last: String },
}

/// Block-state tracker: turns [`LineEvent`]s into HTML lines.
///
/// Holds exactly one open container at a time and emits matching close tags
/// before any different container opens.
pub struct BlockBuilder {
    open: OpenBlock,
    blank_line_closes_list: bool,
    out: Vec<String>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            blank_line_closes_list: false,
            out: vec![],
        }
    }

    /// Makes a blank line end an open list as well as an open paragraph.
    pub fn with_blank_line_closes_list(mut self, yes: bool) -> Self {
        self.blank_line_closes_list = yes;
        self
    }

    /// Returns which container is currently open.
    pub fn state(&self) -> BlockState {
        match self.open {
            OpenBlock::None => BlockState::None,
            OpenBlock::List(ListKind::Unordered) => BlockState::UnorderedList,
            OpenBlock::List(ListKind::Ordered) => BlockState::OrderedList,
            OpenBlock::Paragraph { .. } => BlockState::Paragraph,
        }
    }

    pub fn push(&mut self, ev: &LineEvent) {
        log::trace!("{:?} {:?} in {:?}", ev.line, ev.kind, self.state());

        match ev.kind {
            LineKind::Heading { level } => {
                self.close();
                self.out.push(Heading::render(level, &ev.content));
            }
            LineKind::UnorderedItem | LineKind::OrderedItem => {
                if let Some(list) = ev.kind.list_kind() {
                    self.push_item(list, &ev.content);
                }
            }
            LineKind::Text => self.push_text(&ev.content),
            LineKind::Blank => self.push_blank(),
        }
    }

    /// Closes whatever is still open and returns the finished lines.
    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.close();
        self.out
    }

    fn push_item(&mut self, list: ListKind, content: &str) {
        if !matches!(self.open, OpenBlock::List(open) if open == list) {
            self.close();
            self.out.push(list.open_tag().to_string());
            self.open = OpenBlock::List(list);
        }
        self.out.push(ListItem::render(content));
    }

    fn push_text(&mut self, content: &str) {
        match &mut self.open {
            OpenBlock::Paragraph { last } => {
                let prev = std::mem::replace(last, content.to_string());
                self.out.push(Paragraph::render_line(&prev, true));
            }
            _ => {
                self.close();
                self.out.push(Paragraph::OPEN.to_string());
                self.open = OpenBlock::Paragraph {
                    last: content.to_string(),
                };
            }
        }
    }

    fn push_blank(&mut self) {
        match self.open {
            OpenBlock::Paragraph { .. } => self.close(),
            OpenBlock::List(_) if self.blank_line_closes_list => self.close(),
            _ => {}
        }
    }

    /// Emits the close tag of the open container, if any, and resets to
    /// `None`. A paragraph flushes its last line without a break marker.
    fn close(&mut self) {
        let prev = std::mem::replace(&mut self.open, OpenBlock::None);
        match prev {
            OpenBlock::None => {}
            OpenBlock::List(list) => {
                self.out.push(list.close_tag().to_string());
            }
            OpenBlock::Paragraph { last } => {
                self.out.push(Paragraph::render_line(&last, false));
                self.out.push(Paragraph::CLOSE.to_string());
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
