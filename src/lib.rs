//! `yamdog`: build Markdown documents as element trees.
//!
//! Elements nest freely: text inside links inside table cells inside quotes.
//! A [`Document`] renders the tree and takes care of the parts that need the
//! whole tree: footnotes are numbered and listed at the end, titled links
//! become numbered references, and `Toc` markers are filled with the
//! document's headings.
//!
//! # Quick start
//!
//! ```
//! use yamdog::{Document, Footnote, Heading, Paragraph, Text};
//!
//! let note = Footnote::new("A note.");
//! let doc = Document::from_items(vec![
//!     yamdog::Element::from(Heading::new("Title", 1).unwrap()),
//!     Paragraph::new(vec![
//!         yamdog::Element::from("Some "),
//!         Text::new("bold").bold().into(),
//!         " text".into(),
//!         note.into(),
//!     ])
//!     .into(),
//! ]);
//! assert_eq!(doc.to_markdown(), "# Title\n\nSome **bold** text[^1]\n\n[^1]: A note.");
//! ```

pub mod blocks;
pub mod collect;
pub mod document;
pub mod element;
pub mod error;
pub mod inline;
pub mod listing;
pub mod paragraph;
pub mod render_md;
pub mod table;
pub mod types;
pub mod util;

pub use blocks::{CodeBlock, HRule, Header, Heading, Image, MathBlock, Quote, Toc};
pub use collect::{Collected, Footnote, FootnoteId, Link, ReferenceKey};
pub use document::{Document, DocumentBuilder};
pub use element::Element;
pub use error::*;
pub use inline::{Address, Checkbox, Code, Emoji, Math, Text, make_checklist};
pub use listing::{ListItem, Listing};
pub use paragraph::Paragraph;
pub use render_md::RenderPlan;
pub use table::Table;
pub use types::*;
