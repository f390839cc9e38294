//! Markdown rendering pipeline.
//!
//! Rendering a document takes two passes. [`prepare`] walks the tree once and
//! builds a [`RenderPlan`]: footnote numbers, reference numbers and table of
//! contents texts. [`render`] then turns the tree into text, looking numbers up
//! in the plan. The tree itself is never modified, so a document renders the
//! same way every time.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use indexmap::IndexSet;
use tracing::{debug, debug_span};

use crate::blocks::{CodeBlock, Heading, Quote, Toc};
use crate::collect::{Collector, Footnote, FootnoteId, Link, ReferenceKey};
use crate::document::Document;
use crate::element::Element;
use crate::inline::{Checkbox, Text};
use crate::listing::Listing;
use crate::paragraph::Paragraph;
use crate::table::Table;
use crate::util::{INDENT, heading_anchor, sanitize, strip_brackets};

/// Numbering decided for one document.
///
/// The default plan is empty: footnotes render `[^0]`, reference links render
/// inline and tables of contents render as empty text.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    keying: bool,
    footnote_indices: HashMap<FootnoteId, usize>,
    notes: Vec<Footnote>,
    references: IndexSet<ReferenceKey>,
    tocs: BTreeMap<u8, String>,
}

impl RenderPlan {
    /// Plan used to compute footnote deduplication keys: nested footnotes
    /// render as identity tokens.
    pub(crate) fn keying() -> Self {
        Self {
            keying: true,
            ..Self::default()
        }
    }

    pub(crate) fn is_keying(&self) -> bool {
        self.keying
    }

    /// One-based number of the footnote, shared by every footnote whose
    /// content matches.
    pub fn footnote_index(&self, note: &Footnote) -> Option<usize> {
        self.footnote_indices.get(&note.id()).copied()
    }

    /// One-based number of a titled link's reference entry.
    pub fn reference_index(&self, link: &Link) -> Option<usize> {
        let key = link.reference_key()?;
        self.references.get_index_of(&key).map(|i| i + 1)
    }

    /// Table of contents text for a marker of the given level.
    pub fn toc_text(&self, level: u8) -> &str {
        self.tocs.get(&level).map(String::as_str).unwrap_or("")
    }

    /// Number of distinct footnote entries.
    pub fn footnote_count(&self) -> usize {
        self.notes.len()
    }

    /// Number of distinct reference entries.
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }
}

/// Collect footnotes, references and headings, and number them.
pub fn prepare(document: &Document) -> RenderPlan {
    let span = debug_span!("prepare", items = document.content().len());
    let _guard = span.enter();

    let mut collector = Collector::default();
    let mut toc_levels = BTreeSet::new();
    let mut headings = Vec::new();
    for item in document.content() {
        match item {
            Element::Toc(toc) => {
                toc_levels.insert(toc.level());
            }
            Element::Heading(heading) => {
                if heading.is_in_toc() {
                    headings.push(heading);
                }
                collector.visit(item);
            }
            other => collector.visit(other),
        }
    }
    let collected = collector.finish();

    let mut plan = RenderPlan::default();
    for (index, group) in collected.footnotes.values().enumerate() {
        for note in group {
            plan.footnote_indices.insert(note.id(), index + 1);
        }
        if let Some(first) = group.first() {
            plan.notes.push(first.clone());
        }
    }
    plan.references = collected.links.into_keys().collect();

    // Heading labels may cite footnotes, so they are rendered with the
    // numbering above already in place.
    plan.tocs = toc_texts(&toc_levels, &headings, &plan);

    debug!(
        footnotes = plan.footnote_count(),
        references = plan.reference_count(),
        tocs = plan.tocs.len(),
        "prepared document"
    );
    plan
}

fn toc_texts(levels: &BTreeSet<u8>, headings: &[&Heading], plan: &RenderPlan) -> BTreeMap<u8, String> {
    let Some(&bottom) = levels.last() else {
        return BTreeMap::new();
    };
    let top = headings.iter().map(|h| h.level()).min().unwrap_or(1);

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut lines: BTreeMap<u8, Vec<String>> = levels.iter().map(|&l| (l, Vec::new())).collect();
    for heading in headings {
        let text = render_element(heading.content(), plan);
        let mut anchor = heading_anchor(&text);
        let duplicates = *seen
            .entry(anchor.clone())
            .and_modify(|count| *count += 1)
            .or_insert(0);

        // Too deep for every marker, but still counted for anchor suffixes.
        if heading.level() > bottom {
            continue;
        }
        if duplicates > 0 {
            anchor.push_str(&duplicates.to_string());
        }
        let indent = INDENT.repeat(usize::from(heading.level() - top));
        let line = format!("{indent}- [{}](#{anchor})", strip_brackets(&text));
        for (&level, texts) in lines.iter_mut() {
            if heading.level() <= level {
                texts.push(line.clone());
            }
        }
    }
    lines
        .into_iter()
        .map(|(level, texts)| (level, texts.join("\n")))
        .collect()
}

/// Render a prepared document.
pub fn render(document: &Document, plan: &RenderPlan) -> String {
    let mut parts = Vec::with_capacity(document.content().len() + 3);
    if let Some(header) = document.header() {
        parts.push(header.to_string());
    }
    for item in document.content() {
        parts.push(match item {
            Element::Raw(text) => sanitize(text).trim().to_string(),
            other => render_element(other, plan),
        });
    }

    if !plan.notes.is_empty() {
        let block = plan
            .notes
            .iter()
            .enumerate()
            .map(|(i, note)| format!("[^{}]: {}", i + 1, render_element(&note.borrow_content(), plan)))
            .collect::<Vec<_>>()
            .join("\n");
        parts.push(block);
    }
    if !plan.references.is_empty() {
        let block = plan
            .references
            .iter()
            .enumerate()
            .map(|(i, (target, title))| format!("[{}]: <{target}> \"{title}\"", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        parts.push(block);
    }

    parts.join("\n\n")
}

/// Prepare and render in one step.
pub fn to_markdown(document: &Document) -> String {
    render(document, &prepare(document))
}

pub(crate) fn render_element(element: &Element, plan: &RenderPlan) -> String {
    match element {
        Element::Raw(text) => text.clone(),
        Element::Text(text) => text.render(plan),
        Element::Code(code) => code.to_string(),
        Element::Address(address) => address.to_string(),
        Element::Emoji(emoji) => emoji.to_string(),
        Element::Math(math) => math.to_string(),
        Element::Checkbox(checkbox) => checkbox.render(plan),
        Element::Link(link) => link.render(plan),
        Element::Footnote(note) => note.render(plan),
        Element::Paragraph(paragraph) => paragraph.render(plan),
        Element::Heading(heading) => heading.render(plan),
        Element::CodeBlock(block) => block.render(plan),
        Element::MathBlock(block) => block.to_string(),
        Element::Quote(quote) => quote.render(plan),
        Element::HRule(rule) => rule.to_string(),
        Element::Image(image) => image.to_string(),
        Element::Listing(listing) => listing.render(plan),
        Element::Table(table) => table.render(plan),
        Element::Toc(toc) => toc.render(plan),
    }
}

// Stand-alone rendering, outside any document.
macro_rules! display_with_empty_plan {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.render(&RenderPlan::default()))
                }
            }
        )*
    };
}

display_with_empty_plan!(
    Text,
    Checkbox,
    Link,
    Footnote,
    Paragraph,
    Heading,
    CodeBlock,
    Quote,
    Listing,
    Table,
    Toc,
);
