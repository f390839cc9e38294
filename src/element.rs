use std::fmt;

use crate::blocks::{CodeBlock, HRule, Heading, Image, MathBlock, Quote, Toc};
use crate::collect::{Collected, Collector, Footnote, Link};
use crate::inline::{Address, Checkbox, Code, Emoji, Math, Text};
use crate::listing::Listing;
use crate::paragraph::Paragraph;
use crate::render_md::{RenderPlan, render_element};
use crate::table::Table;

/// Any node of a document tree.
///
/// `Raw` holds a literal text fragment; every other variant is a concrete
/// element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Raw(String),
    Text(Text),
    Code(Code),
    Address(Address),
    Emoji(Emoji),
    Math(Math),
    Checkbox(Checkbox),
    Link(Link),
    Footnote(Footnote),
    Paragraph(Paragraph),
    Heading(Heading),
    CodeBlock(CodeBlock),
    MathBlock(MathBlock),
    Quote(Quote),
    HRule(HRule),
    Image(Image),
    Listing(Listing),
    Table(Table),
    Toc(Toc),
}

impl Element {
    /// Short name of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Raw(_) => "raw text",
            Element::Text(_) => "text",
            Element::Code(_) => "code",
            Element::Address(_) => "address",
            Element::Emoji(_) => "emoji",
            Element::Math(_) => "math",
            Element::Checkbox(_) => "checkbox",
            Element::Link(_) => "link",
            Element::Footnote(_) => "footnote",
            Element::Paragraph(_) => "paragraph",
            Element::Heading(_) => "heading",
            Element::CodeBlock(_) => "code block",
            Element::MathBlock(_) => "math block",
            Element::Quote(_) => "quote",
            Element::HRule(_) => "horizontal rule",
            Element::Image(_) => "image",
            Element::Listing(_) => "listing",
            Element::Table(_) => "table",
            Element::Toc(_) => "table of contents",
        }
    }

    /// Whether the element can be appended to a `Paragraph`.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Element::Text(_)
                | Element::Code(_)
                | Element::Address(_)
                | Element::Emoji(_)
                | Element::Math(_)
                | Element::Link(_)
                | Element::Footnote(_)
        )
    }

    /// Gather the links and footnotes in this subtree, in first-citation
    /// order.
    pub fn collect(&self) -> Collected {
        let mut collector = Collector::default();
        collector.visit(self);
        collector.finish()
    }

    /// Call `visit` on every direct child element, left to right.
    ///
    /// Nested sub-listings are flattened: their labels and items are visited
    /// as children of the enclosing listing.
    pub fn for_each_child(&self, visit: &mut dyn FnMut(&Element)) {
        match self {
            Element::Raw(_)
            | Element::Code(_)
            | Element::Address(_)
            | Element::Emoji(_)
            | Element::Math(_)
            | Element::MathBlock(_)
            | Element::HRule(_)
            | Element::Image(_)
            | Element::Toc(_) => {}
            Element::Text(text) => visit(text.content()),
            Element::Checkbox(checkbox) => visit(checkbox.content()),
            Element::Link(link) => {
                if let Some(content) = link.content() {
                    visit(content);
                }
            }
            Element::Footnote(note) => visit(&note.content()),
            Element::Paragraph(paragraph) => paragraph.items().iter().for_each(visit),
            Element::Heading(heading) => visit(heading.content()),
            Element::CodeBlock(block) => visit(block.content()),
            Element::Quote(quote) => visit(quote.content()),
            Element::Listing(listing) => listing.for_each_element(visit),
            Element::Table(table) => {
                table.header().iter().for_each(&mut *visit);
                for row in table.rows() {
                    row.iter().for_each(&mut *visit);
                }
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_element(self, &RenderPlan::default()))
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Raw(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Raw(text)
    }
}

impl From<&String> for Element {
    fn from(text: &String) -> Self {
        Element::Raw(text.clone())
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Raw(c.to_string())
    }
}

macro_rules! raw_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Element::Raw(value.to_string())
                }
            }
        )*
    };
}

raw_from_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

macro_rules! element_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(value: $variant) -> Self {
                    Element::$variant(value)
                }
            }
        )*
    };
}

element_from!(
    Text, Code, Address, Emoji, Math, Checkbox, Link, Footnote, Paragraph, Heading, CodeBlock,
    MathBlock, Quote, HRule, Image, Listing, Table, Toc,
);
