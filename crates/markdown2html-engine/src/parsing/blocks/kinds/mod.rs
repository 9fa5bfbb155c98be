pub mod heading;
pub mod list;
pub mod paragraph;

pub use heading::Heading;
pub use list::{ListItem, ListKind};
pub use paragraph::Paragraph;
