use crate::element::Element;
use crate::render_md::{RenderPlan, render_element};
use crate::types::ListingStyle;
use crate::util::{INDENT, indent_continuation};

/// One entry of a [`Listing`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    /// A plain item. Continuation lines line up under the first line's text.
    Single(Element),
    /// A labelled item followed by an indented sub-listing.
    Nested { label: Element, sublist: Box<Listing> },
}

impl ListItem {
    pub fn nested(label: impl Into<Element>, sublist: Listing) -> Self {
        ListItem::Nested {
            label: label.into(),
            sublist: Box::new(sublist),
        }
    }
}

impl From<Element> for ListItem {
    fn from(element: Element) -> Self {
        ListItem::Single(element)
    }
}

/// Ordered, unordered or definition list.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    style: ListingStyle,
    items: Vec<ListItem>,
}

impl Listing {
    pub fn new<T: Into<Element>>(style: ListingStyle, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            style,
            items: items
                .into_iter()
                .map(|item| ListItem::Single(item.into()))
                .collect(),
        }
    }

    pub fn from_items(style: ListingStyle, items: impl IntoIterator<Item = ListItem>) -> Self {
        Self {
            style,
            items: items.into_iter().collect(),
        }
    }

    pub fn style(&self) -> ListingStyle {
        self.style
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: impl Into<Element>) {
        self.items.push(ListItem::Single(item.into()));
    }

    /// Append a labelled item with a sub-listing under it.
    pub fn nest(&mut self, label: impl Into<Element>, sublist: Listing) {
        self.items.push(ListItem::nested(label, sublist));
    }

    /// Visit every element in item order, descending into sub-listings.
    pub(crate) fn for_each_element(&self, visit: &mut dyn FnMut(&Element)) {
        for item in &self.items {
            match item {
                ListItem::Single(element) => visit(element),
                ListItem::Nested { label, sublist } => {
                    visit(label);
                    sublist.for_each_element(visit);
                }
            }
        }
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        let mut lines = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let prefix = self.style.prefix(index);
            match item {
                ListItem::Single(element) => {
                    let text = render_element(element, plan);
                    let indent = " ".repeat(prefix.chars().count());
                    lines.push(format!("{prefix}{}", indent_continuation(&text, &indent)));
                }
                ListItem::Nested { label, sublist } => {
                    lines.push(format!("{prefix}{}", render_element(label, plan)));
                    if sublist.is_empty() {
                        continue;
                    }
                    let text = sublist.render(plan);
                    lines.push(format!("{INDENT}{}", indent_continuation(&text, INDENT)));
                }
            }
        }
        lines.join("\n")
    }
}
