//! Inline leaf elements.

use std::collections::BTreeSet;
use std::fmt;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::listing::Listing;
use crate::render_md::{RenderPlan, render_element};
use crate::types::{Flavour, ListingStyle, TextLevel, TextStyle};
use crate::util::sanitize;

/// Styled text: `**bold**`, `*italic*`, `~~struck~~`, `==highlighted==`,
/// `^super^`, `~sub~`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: Box<Element>,
    styles: BTreeSet<TextStyle>,
    level: TextLevel,
}

impl Text {
    pub fn new(content: impl Into<Element>) -> Self {
        Self {
            content: Box::new(content.into()),
            styles: BTreeSet::new(),
            level: TextLevel::Normal,
        }
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn styles(&self) -> &BTreeSet<TextStyle> {
        &self.styles
    }

    pub fn level(&self) -> TextLevel {
        self.level
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.styles.insert(style);
        self
    }

    pub fn styled(mut self, styles: impl IntoIterator<Item = TextStyle>) -> Self {
        self.styles.extend(styles);
        self
    }

    pub fn with_level(mut self, level: TextLevel) -> Self {
        self.level = level;
        self
    }

    pub fn bold(self) -> Self {
        self.style(TextStyle::Bold)
    }

    pub fn unbold(mut self) -> Self {
        self.styles.remove(&TextStyle::Bold);
        self
    }

    pub fn italicize(self) -> Self {
        self.style(TextStyle::Italic)
    }

    pub fn unitalicize(mut self) -> Self {
        self.styles.remove(&TextStyle::Italic);
        self
    }

    pub fn strikethrough(self) -> Self {
        self.style(TextStyle::Strikethrough)
    }

    pub fn unstrikethrough(mut self) -> Self {
        self.styles.remove(&TextStyle::Strikethrough);
        self
    }

    pub fn highlight(self) -> Self {
        self.style(TextStyle::Highlight)
    }

    pub fn unhighlight(mut self) -> Self {
        self.styles.remove(&TextStyle::Highlight);
        self
    }

    pub fn superscribe(self) -> Self {
        self.with_level(TextLevel::Superscript)
    }

    pub fn subscribe(self) -> Self {
        self.with_level(TextLevel::Subscript)
    }

    /// Back to the baseline.
    pub fn normalise(self) -> Self {
        self.with_level(TextLevel::Normal)
    }

    /// Drop every style but keep the level.
    pub fn destyle(mut self) -> Self {
        self.styles.clear();
        self
    }

    /// Drop every style and the level.
    pub fn reset(self) -> Self {
        self.destyle().normalise()
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        // Sub/superscript markers must be innermost.
        let marker = self.level.marker();
        let mut text = format!("{marker}{}{marker}", render_element(&self.content, plan));
        for style in &self.styles {
            let marker = style.marker();
            text = format!("{marker}{text}{marker}");
        }
        text
    }
}

/// Inline monospace text.
#[derive(Debug, Clone, PartialEq)]
pub struct Code(pub String);

impl Code {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.0)
    }
}

/// An autolinked address: `<text>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Address(pub String);

impl Address {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// Emoji shortcode, e.g. `:smile:`.
#[derive(Debug, Clone, PartialEq)]
pub struct Emoji(pub String);

impl Emoji {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}:", self.0)
    }
}

/// Inline KaTeX math.
#[derive(Debug, Clone, PartialEq)]
pub struct Math {
    text: String,
    flavour: Flavour,
}

impl Math {
    /// GitHub flavoured inline math.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flavour: Flavour::GitHub,
        }
    }

    /// Only GitHub and GitLab define inline math.
    pub fn with_flavour(text: impl Into<String>, flavour: Flavour) -> Result<Self> {
        check_math_flavour(flavour, "inline math")?;
        Ok(Self {
            text: text.into(),
            flavour,
        })
    }

    pub fn flavour(&self) -> Flavour {
        self.flavour
    }
}

impl fmt::Display for Math {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flavour {
            Flavour::GitLab => write!(f, "$`{}`$", self.text),
            _ => write!(f, "${}$", self.text),
        }
    }
}

pub(crate) fn check_math_flavour(flavour: Flavour, element: &'static str) -> Result<()> {
    match flavour {
        Flavour::GitHub | Flavour::GitLab => Ok(()),
        other => Err(Error::UnsupportedFlavour {
            flavour: other,
            element,
        }),
    }
}

/// Task-list checkbox: `[x] content` or `[ ] content`.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox {
    checked: bool,
    content: Box<Element>,
}

impl Checkbox {
    pub fn new(checked: bool, content: impl Into<Element>) -> Self {
        Self {
            checked,
            content: Box::new(content.into()),
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        let mark = if self.checked { "x" } else { " " };
        let content = match self.content.as_ref() {
            Element::Raw(text) => sanitize(text),
            other => render_element(other, plan),
        };
        format!("[{mark}] {content}")
    }
}

/// An unordered listing of checkboxes.
pub fn make_checklist<C: Into<Element>>(items: impl IntoIterator<Item = (bool, C)>) -> Listing {
    Listing::new(
        ListingStyle::Unordered,
        items
            .into_iter()
            .map(|(checked, content)| Checkbox::new(checked, content)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_styles() {
        assert_eq!(Text::new("").to_string(), "");
        assert_eq!(Text::new("test").bold().to_string(), "**test**");
        assert_eq!(Text::new("test").italicize().to_string(), "*test*");
        assert_eq!(Text::new("test").strikethrough().to_string(), "~~test~~");
        assert_eq!(Text::new("test").highlight().to_string(), "==test==");
        assert_eq!(Text::new("test").superscribe().to_string(), "^test^");
        assert_eq!(Text::new("test").subscribe().to_string(), "~test~");
        assert_eq!(Text::new("test").bold().italicize().to_string(), "***test***");
    }

    #[test]
    fn level_marker_is_innermost() {
        assert_eq!(Text::new("x").subscribe().bold().to_string(), "**~x~**");
    }

    #[test]
    fn style_toggles() {
        let text = Text::new("test");
        assert!(text.styles().is_empty());
        let text = text.bold();
        assert!(text.styles().contains(&TextStyle::Bold));
        let text = text.unbold();
        assert!(text.styles().is_empty());
        let text = text.italicize().unitalicize().strikethrough().unstrikethrough();
        assert!(text.styles().is_empty());
        let text = text.highlight().unhighlight();
        assert!(text.styles().is_empty());

        let text = text.superscribe();
        assert_eq!(text.level(), TextLevel::Superscript);
        let text = text.subscribe();
        assert_eq!(text.level(), TextLevel::Subscript);
        let text = text.normalise();
        assert_eq!(text.level(), TextLevel::Normal);

        let text = text.bold().italicize().highlight().superscribe().destyle();
        assert!(text.styles().is_empty());
        assert_eq!(text.level(), TextLevel::Superscript);
        let text = text.bold().reset();
        assert!(text.styles().is_empty());
        assert_eq!(text.level(), TextLevel::Normal);
    }

    #[test]
    fn simple_inlines() {
        assert_eq!(Code::new("").to_string(), "``");
        assert_eq!(Code::new("test").to_string(), "`test`");
        assert_eq!(Address::new("me@example.com").to_string(), "<me@example.com>");
        assert_eq!(Emoji::new("test").to_string(), ":test:");
    }

    #[test]
    fn math_flavours() {
        assert_eq!(Math::new("").to_string(), "$$");
        assert_eq!(Math::new("test").to_string(), "$test$");
        assert_eq!(
            Math::with_flavour("test", Flavour::GitLab).unwrap().to_string(),
            "$`test`$"
        );
        assert!(matches!(
            Math::with_flavour("test", Flavour::PyPI),
            Err(Error::UnsupportedFlavour {
                flavour: Flavour::PyPI,
                ..
            })
        ));
    }

    #[test]
    fn checkboxes() {
        assert_eq!(Checkbox::new(true, "test").to_string(), "[x] test");
        assert_eq!(Checkbox::new(false, "test").to_string(), "[ ] test");
        assert_eq!(
            Checkbox::new(false, "a\n    wrapped line").to_string(),
            "[ ] a wrapped line"
        );
    }

    #[test]
    fn checklist_is_unordered_listing() {
        let checklist = make_checklist([(true, "testtrue"), (false, "testfalse")]);
        assert_eq!(checklist.style(), ListingStyle::Unordered);
        assert_eq!(checklist.to_string(), "- [x] testtrue\n- [ ] testfalse");
    }
}
