use crate::element::Element;
use crate::error::{Error, Result};
use crate::render_md::{RenderPlan, render_element};
use crate::util::sanitize;

/// A run of inline content rendered on one logical line.
///
/// Raw text items are sanitised: wrapped literal lines are joined with single
/// spaces. Items are joined with the separator, empty by default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    items: Vec<Element>,
    separator: String,
}

impl Paragraph {
    pub fn new<T: Into<Element>>(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            separator: String::new(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Append an inline element, or every item of another paragraph.
    pub fn append(&mut self, item: impl Into<Element>) -> Result<()> {
        match item.into() {
            Element::Paragraph(other) => self.items.extend(other.items),
            item if item.is_inline() => self.items.push(item),
            other => {
                return Err(Error::UnsupportedAppend { kind: other.kind() });
            }
        }
        Ok(())
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        self.items
            .iter()
            .map(|item| match item {
                Element::Raw(text) => sanitize(text),
                other => render_element(other, plan),
            })
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}
