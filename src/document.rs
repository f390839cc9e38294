use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::blocks::Header;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::render_md::{self, RenderPlan};

/// An ordered sequence of elements with optional front matter.
///
/// Footnotes and reference links anywhere in the tree are numbered when the
/// document renders, and `Toc` markers among the top-level items are filled
/// with the top-level headings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    content: Vec<Element>,
    header: Option<Header>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<T: Into<Element>>(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            content: items.into_iter().map(Into::into).collect(),
            header: None,
        }
    }

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    pub fn content(&self) -> &[Element] {
        &self.content
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn append(&mut self, item: impl Into<Element>) {
        self.content.push(item.into());
    }

    /// Append the other document's items. Its header is dropped.
    pub fn extend(&mut self, other: Document) {
        self.content.extend(other.content);
    }

    /// Consuming form of [`Document::extend`].
    pub fn concat(mut self, other: Document) -> Self {
        self.extend(other);
        self
    }

    pub fn prepare(&self) -> RenderPlan {
        render_md::prepare(self)
    }

    pub fn render(&self, plan: &RenderPlan) -> String {
        render_md::render(self, plan)
    }

    pub fn to_markdown(&self) -> String {
        render_md::to_markdown(self)
    }

    /// Render and write to `path`, replacing any existing file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_markdown();
        debug!(path = %path.display(), bytes = text.len(), "writing document");
        fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

impl<T: Into<Element>> FromIterator<T> for Document {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

/// Builder for [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    content: Vec<Element>,
    language: Option<String>,
    text: Option<String>,
}

impl DocumentBuilder {
    pub fn item(mut self, item: impl Into<Element>) -> Self {
        self.content.push(item.into());
        self
    }

    pub fn items<T: Into<Element>>(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.content.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn header_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn header_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn header(self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.header_language(language).header_text(text)
    }

    /// Fails when only one of header language and header text was given.
    pub fn build(self) -> Result<Document> {
        let header = match (self.language, self.text) {
            (Some(language), Some(text)) => Some(Header::new(language, text)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(Error::InvalidConfiguration {
                    message: "header language given without header text".to_string(),
                });
            }
            (None, Some(_)) => {
                return Err(Error::InvalidConfiguration {
                    message: "header text given without header language".to_string(),
                });
            }
        };
        Ok(Document {
            content: self.content,
            header,
        })
    }
}
