//! Collectable elements and the traversal that gathers them.
//!
//! `Link` and `Footnote` are shared handles: the same object may sit at
//! several places in a tree. A document numbers them in a single depth-first,
//! left-to-right pass; equal reference keys share one reference entry and
//! equal footnote contents share one footnote entry.

use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use tracing::trace;

use crate::element::Element;
use crate::render_md::{RenderPlan, render_element};

/// `(target, title)` pair identifying a reference-style link.
pub type ReferenceKey = (String, String);

// ------------------------------------------------------------------
// Link
// ------------------------------------------------------------------

#[derive(Debug, PartialEq)]
struct LinkNode {
    target: String,
    content: Option<Element>,
    title: Option<String>,
}

/// A link to a target.
///
/// Without content the link renders as a bare `<target>` address. A titled
/// link becomes a reference: inside a document it renders as `[content][i]`
/// and the document appends `[i]: <target> "title"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Link(Rc<LinkNode>);

impl Link {
    /// A bare address link, rendered `<target>`.
    pub fn new(target: impl Into<String>) -> Self {
        Self(Rc::new(LinkNode {
            target: target.into(),
            content: None,
            title: None,
        }))
    }

    /// An inline link, rendered `[content](target)`.
    pub fn with_content(target: impl Into<String>, content: impl Into<Element>) -> Self {
        Self(Rc::new(LinkNode {
            target: target.into(),
            content: Some(content.into()),
            title: None,
        }))
    }

    /// Turn the link into a numbered reference.
    pub fn title(self, title: impl Into<String>) -> Self {
        let node = Rc::try_unwrap(self.0).unwrap_or_else(|shared| LinkNode {
            target: shared.target.clone(),
            content: shared.content.clone(),
            title: shared.title.clone(),
        });
        Self(Rc::new(LinkNode {
            title: Some(title.into()),
            ..node
        }))
    }

    pub fn target(&self) -> &str {
        &self.0.target
    }

    pub fn content(&self) -> Option<&Element> {
        self.0.content.as_ref()
    }

    pub fn reference_title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    /// The reference key, present only for titled links.
    pub fn reference_key(&self) -> Option<ReferenceKey> {
        self.0
            .title
            .as_ref()
            .map(|title| (self.0.target.clone(), title.clone()))
    }

    /// Whether two handles point at the same link object.
    pub fn same_object(&self, other: &Link) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn address(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        let Some(content) = &self.0.content else {
            return format!("<{}>", self.0.target);
        };
        let content = render_element(content, plan);
        match plan.reference_index(self) {
            Some(index) => format!("[{content}][{index}]"),
            None => format!("[{content}]({})", self.0.target),
        }
    }
}

// ------------------------------------------------------------------
// Footnote
// ------------------------------------------------------------------

static NEXT_FOOTNOTE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a footnote object, shared by all of its clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FootnoteId(u64);

impl fmt::Display for FootnoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct FootnoteNode {
    id: FootnoteId,
    content: RefCell<Element>,
}

/// A numbered note: `[^i]` in place, `[^i]: content` at the end of the
/// document.
///
/// Clones share identity. Content can be replaced after construction with
/// [`Footnote::set_content`], which is how a note that cites itself is built.
/// Such a note is a reference cycle and is never freed.
#[derive(Clone)]
pub struct Footnote(Rc<FootnoteNode>);

impl Footnote {
    pub fn new(content: impl Into<Element>) -> Self {
        Self(Rc::new(FootnoteNode {
            id: FootnoteId(NEXT_FOOTNOTE_ID.fetch_add(1, Ordering::Relaxed)),
            content: RefCell::new(content.into()),
        }))
    }

    pub fn id(&self) -> FootnoteId {
        self.0.id
    }

    /// A copy of the current content. Nested links and footnotes in the copy
    /// are the same shared objects.
    pub fn content(&self) -> Element {
        self.0.content.borrow().clone()
    }

    /// Read access for rendering and collection, which never replace content.
    pub(crate) fn borrow_content(&self) -> Ref<'_, Element> {
        self.0.content.borrow()
    }

    pub fn set_content(&self, content: impl Into<Element>) {
        *self.0.content.borrow_mut() = content.into();
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        if plan.is_keying() {
            return format!("[^@{}]", self.0.id);
        }
        format!("[^{}]", plan.footnote_index(self).unwrap_or(0))
    }

    /// Deduplication key: the content rendered with nested notes shown by
    /// identity rather than by number.
    pub(crate) fn content_key(&self) -> String {
        render_element(&self.borrow_content(), &RenderPlan::keying())
    }
}

impl PartialEq for Footnote {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Footnote {
    // Content may cite this footnote, so it is not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Footnote")
            .field("id", &self.0.id)
            .finish_non_exhaustive()
    }
}

// ------------------------------------------------------------------
// Collection
// ------------------------------------------------------------------

/// Collectables gathered from a tree, in first-citation order.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Reference key to the distinct link objects sharing it.
    pub links: IndexMap<ReferenceKey, Vec<Link>>,
    /// Footnote content key to the distinct footnote objects sharing it.
    pub footnotes: IndexMap<String, Vec<Footnote>>,
}

impl Collected {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.footnotes.is_empty()
    }
}

/// Depth-first, left-to-right walk. A collectable registers itself before its
/// content; a link or footnote already visited is not entered again.
#[derive(Default)]
pub(crate) struct Collector {
    visited: HashSet<FootnoteId>,
    visited_links: HashSet<*const ()>,
    collected: Collected,
}

impl Collector {
    pub(crate) fn visit(&mut self, element: &Element) {
        match element {
            Element::Link(link) => {
                if !self.visited_links.insert(link.address()) {
                    trace!(link = link.target(), "link already collected");
                    return;
                }
                if let Some(key) = link.reference_key() {
                    self.collected.links.entry(key).or_default().push(link.clone());
                }
                if let Some(content) = link.content() {
                    self.visit(content);
                }
            }
            Element::Footnote(note) => {
                if !self.visited.insert(note.id()) {
                    trace!(footnote = %note.id(), "footnote already collected");
                    return;
                }
                self.collected
                    .footnotes
                    .entry(note.content_key())
                    .or_default()
                    .push(note.clone());
                let content = note.borrow_content();
                self.visit(&content);
            }
            other => other.for_each_child(&mut |child| self.visit(child)),
        }
    }

    pub(crate) fn finish(self) -> Collected {
        self.collected
    }
}
