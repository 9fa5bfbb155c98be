//! # Block Parsing
//!
//! Two-phase, line-at-a-time conversion of the dialect's block structure.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each raw line becomes a
//!    `LineEvent` carrying its kind (heading, list item, blank, text) and its
//!    marker-free content
//!
//! 2. **Block Tracking** (`builder`): a `BlockBuilder` holds the single open
//!    container and emits open/close tags as events cross container
//!    boundaries
//!
//! ## Modules
//!
//! - **`types`**: `LineKind`, `LineEvent`, `BlockState`
//! - **`kinds`**: marker/tag owners (`Heading`, `ListItem`, `ListKind`, `Paragraph`)
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - At most one container (paragraph or list) is open at any time
//! - A different container never opens before the current one is closed
//! - The last line of a paragraph carries no break marker

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::MarkdownLineClassifier;
pub use types::{BlockState, LineEvent, LineKind};
