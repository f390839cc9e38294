//! Block-level leaf elements and the document header.

use std::fmt;

use serde::Serialize;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::inline::check_math_flavour;
use crate::render_md::{RenderPlan, render_element};
use crate::types::Flavour;
use crate::util::{fence_length, sanitize};

/// A section heading, levels 1 to 6.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    content: Box<Element>,
    level: u8,
    in_toc: bool,
    alt_style: bool,
}

impl Heading {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 6;

    pub fn new(content: impl Into<Element>, level: u8) -> Result<Self> {
        if !(Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&level) {
            return Err(Error::LevelOutOfRange {
                what: "heading",
                level,
                min: Self::MIN_LEVEL,
                max: Self::MAX_LEVEL,
            });
        }
        Ok(Self {
            content: Box::new(content.into()),
            level,
            in_toc: true,
            alt_style: false,
        })
    }

    /// Whether tables of contents list this heading. Defaults to `true`.
    pub fn in_toc(mut self, in_toc: bool) -> Self {
        self.in_toc = in_toc;
        self
    }

    /// Underline style (`===` / `---`) for levels 1 and 2.
    pub fn alt_style(mut self, alt_style: bool) -> Self {
        self.alt_style = alt_style;
        self
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_in_toc(&self) -> bool {
        self.in_toc
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        let text = render_element(&self.content, plan);
        let omit = if self.in_toc { "" } else { " <!-- omit in toc -->" };
        match (self.alt_style, self.level) {
            (true, 1) => format!("{text}{omit}\n{}", "=".repeat(text.chars().count())),
            (true, 2) => format!("{text}{omit}\n{}", "-".repeat(text.chars().count())),
            _ => format!("{} {text}{omit}", "#".repeat(usize::from(self.level))),
        }
    }
}

/// Fenced multi-line monospace text.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    content: Box<Element>,
    language: String,
}

impl CodeBlock {
    pub fn new(content: impl Into<Element>) -> Self {
        Self {
            content: Box::new(content.into()),
            language: String::new(),
        }
    }

    /// Info string placed after the opening fence.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        let text = render_element(&self.content, plan);
        let fence = "`".repeat(fence_length(&text));
        format!("{fence}{}\n{text}\n{fence}", sanitize(&self.language))
    }
}

/// KaTeX math in its own block.
#[derive(Debug, Clone, PartialEq)]
pub struct MathBlock {
    text: String,
    flavour: Flavour,
}

impl MathBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flavour: Flavour::GitHub,
        }
    }

    pub fn with_flavour(text: impl Into<String>, flavour: Flavour) -> Result<Self> {
        check_math_flavour(flavour, "math block")?;
        Ok(Self {
            text: text.into(),
            flavour,
        })
    }

    pub fn flavour(&self) -> Flavour {
        self.flavour
    }
}

impl fmt::Display for MathBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flavour {
            Flavour::GitLab => write!(f, "```math\n{}\n```", self.text),
            _ => write!(f, "$$\n{}\n$$", self.text),
        }
    }
}

/// Block quote. Every line of the content gets a `> ` prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    content: Box<Element>,
}

impl Quote {
    pub fn new(content: impl Into<Element>) -> Self {
        Self {
            content: Box::new(content.into()),
        }
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        format!("> {}", render_element(&self.content, plan).replace('\n', "\n> "))
    }
}

/// Horizontal rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HRule;

impl fmt::Display for HRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("---")
    }
}

/// `![alt](path)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    path: String,
    alt: String,
}

impl Image {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alt: "image".to_string(),
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "![{}]({})", self.alt, self.path)
    }
}

/// Placeholder replaced with a table of contents when the document renders.
///
/// Lists the document's top-level headings with level at most `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toc {
    level: u8,
}

impl Toc {
    pub const DEFAULT_LEVEL: u8 = 4;

    pub fn new(level: u8) -> Self {
        Self { level }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        plan.toc_text(self.level).to_string()
    }
}

impl Default for Toc {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}

/// Front matter placed before the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    language: String,
    text: String,
}

impl Header {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
        }
    }

    /// YAML front matter serialised from `value`.
    pub fn yaml<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let text = serde_yaml::to_string(value)?;
        Ok(Self::new("yaml", text.trim_end_matches('\n')))
    }

    /// JSON front matter serialised from `value`, pretty-printed.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::new("json", serde_json::to_string_pretty(value)?))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = self.language.trim().to_lowercase();
        let text = &self.text;
        match language.as_str() {
            "yaml" => write!(f, "---\n{text}\n---"),
            "toml" => write!(f, "+++\n{text}\n+++"),
            "json" => write!(f, ";;;\n{text}\n;;;"),
            other => write!(f, "---{other}\n{text}\n---"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::inline::Text;

    #[test]
    fn heading_levels() {
        assert_eq!(Heading::new("test", 1).unwrap().to_string(), "# test");
        assert_eq!(Heading::new("test", 6).unwrap().to_string(), "###### test");
        assert!(matches!(
            Heading::new("test", 0),
            Err(Error::LevelOutOfRange {
                what: "heading",
                level: 0,
                ..
            })
        ));
        assert!(Heading::new("test", 7).is_err());
    }

    #[test]
    fn heading_variants() {
        let omitted = Heading::new("test", 2).unwrap().in_toc(false);
        assert_eq!(omitted.to_string(), "## test <!-- omit in toc -->");

        let alt = Heading::new("test", 1).unwrap().alt_style(true);
        assert_eq!(alt.to_string(), "test\n====");
        let alt = Heading::new("test", 2).unwrap().alt_style(true).in_toc(false);
        assert_eq!(alt.to_string(), "test <!-- omit in toc -->\n----");
        let alt = Heading::new("test", 3).unwrap().alt_style(true);
        assert_eq!(alt.to_string(), "### test");
    }

    #[test]
    fn alt_underline_counts_rendered_characters() {
        let heading = Heading::new(Text::new("äö").bold(), 1)
            .unwrap()
            .alt_style(true);
        assert_eq!(heading.to_string(), "**äö**\n======");
    }

    #[test]
    fn code_blocks() {
        assert_eq!(CodeBlock::new("").to_string(), "```\n\n```");
        assert_eq!(
            CodeBlock::new("print('x')").language("python").to_string(),
            "```python\nprint('x')\n```"
        );
        let inner = CodeBlock::new("text").language("md");
        let outer = CodeBlock::new(inner.clone()).language("md");
        assert_eq!(outer.to_string(), "````md\n```md\ntext\n```\n````");
        let outermost = CodeBlock::new(outer);
        assert!(outermost.to_string().starts_with("`````\n````md"));
    }

    #[test]
    fn math_blocks() {
        assert_eq!(MathBlock::new("x").to_string(), "$$\nx\n$$");
        assert_eq!(
            MathBlock::with_flavour("x", Flavour::GitLab)
                .unwrap()
                .to_string(),
            "```math\nx\n```"
        );
        assert!(matches!(
            MathBlock::with_flavour("x", Flavour::Basic),
            Err(Error::UnsupportedFlavour {
                element: "math block",
                ..
            })
        ));
    }

    #[test]
    fn quotes_prefix_every_line() {
        assert_eq!(Quote::new("test").to_string(), "> test");
        assert_eq!(Quote::new("a\nb").to_string(), "> a\n> b");
        assert_eq!(Quote::new(Quote::new("a")).to_string(), "> > a");
    }

    #[test]
    fn leaves() {
        assert_eq!(HRule.to_string(), "---");
        assert_eq!(Image::new("path").to_string(), "![image](path)");
        assert_eq!(Image::new("path").alt("alt").to_string(), "![alt](path)");
        assert_eq!(Toc::default().level(), 4);
        assert_eq!(Toc::default().to_string(), "");
    }

    #[test]
    fn header_fences() {
        assert_eq!(Header::new("yaml", "a: 1").to_string(), "---\na: 1\n---");
        assert_eq!(Header::new(" TOML ", "a = 1").to_string(), "+++\na = 1\n+++");
        assert_eq!(
            Header::new("json", "{\"a\": 1}").to_string(),
            ";;;\n{\"a\": 1}\n;;;"
        );
        assert_eq!(Header::new("PHP", "x").to_string(), "---php\nx\n---");
    }

    #[test]
    fn headers_from_serializable_values() {
        let mut meta = BTreeMap::new();
        meta.insert("title", "Demo");
        meta.insert("author", "Someone");
        let yaml = Header::yaml(&meta).unwrap();
        assert_eq!(yaml.to_string(), "---\nauthor: Someone\ntitle: Demo\n---");

        let json = Header::json(&meta).unwrap();
        assert_eq!(json.language(), "json");
        assert_eq!(
            json.to_string(),
            ";;;\n{\n  \"author\": \"Someone\",\n  \"title\": \"Demo\"\n}\n;;;"
        );
    }
}
