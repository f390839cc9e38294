use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Column alignment for tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The alignment marker cell for a column `width` characters wide.
    ///
    /// Widths below three are treated as three, the shortest marker that can
    /// express every alignment.
    pub fn marker(self, width: usize) -> String {
        let width = width.max(3);
        match self {
            Alignment::Left => format!(":{}", "-".repeat(width - 1)),
            Alignment::Center => format!(":{}:", "-".repeat(width - 2)),
            Alignment::Right => format!("{}:", "-".repeat(width - 1)),
        }
    }

    /// Pad `text` with spaces to `width` characters.
    ///
    /// Centred text puts the odd space on the right.
    pub fn pad(self, text: &str, width: usize) -> String {
        let fill = width.saturating_sub(text.chars().count());
        match self {
            Alignment::Left => format!("{text}{}", " ".repeat(fill)),
            Alignment::Right => format!("{}{text}", " ".repeat(fill)),
            Alignment::Center => {
                let left = fill / 2;
                format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
            }
        }
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | ":--" => Ok(Alignment::Left),
            "center" | "centre" | ":-:" => Ok(Alignment::Center),
            "right" | "--:" => Ok(Alignment::Right),
            _ => Err(unknown("alignment", s)),
        }
    }
}

/// How a `Listing` prefixes its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStyle {
    /// `1. `, `2. `, ...
    Ordered,
    /// `- `
    Unordered,
    /// `: `
    Definition,
}

impl ListingStyle {
    /// Prefix for the item at zero-based `index`.
    pub fn prefix(self, index: usize) -> String {
        match self {
            ListingStyle::Ordered => format!("{}. ", index + 1),
            ListingStyle::Unordered => "- ".to_string(),
            ListingStyle::Definition => ": ".to_string(),
        }
    }
}

impl FromStr for ListingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ordered" => Ok(ListingStyle::Ordered),
            "unordered" => Ok(ListingStyle::Unordered),
            "definition" => Ok(ListingStyle::Definition),
            _ => Err(unknown("listing style", s)),
        }
    }
}

/// Inline text decorations. Declaration order is wrapping order, innermost
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Bold,
    Italic,
    Strikethrough,
    Highlight,
}

impl TextStyle {
    pub fn marker(self) -> &'static str {
        match self {
            TextStyle::Bold => "**",
            TextStyle::Italic => "*",
            TextStyle::Strikethrough => "~~",
            TextStyle::Highlight => "==",
        }
    }
}

impl FromStr for TextStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bold" => Ok(TextStyle::Bold),
            "italic" => Ok(TextStyle::Italic),
            "strikethrough" => Ok(TextStyle::Strikethrough),
            "highlight" => Ok(TextStyle::Highlight),
            _ => Err(unknown("text style", s)),
        }
    }
}

/// Vertical text position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextLevel {
    Subscript,
    #[default]
    Normal,
    Superscript,
}

impl TextLevel {
    pub fn marker(self) -> &'static str {
        match self {
            TextLevel::Subscript => "~",
            TextLevel::Normal => "",
            TextLevel::Superscript => "^",
        }
    }
}

impl FromStr for TextLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subscript" => Ok(TextLevel::Subscript),
            "normal" => Ok(TextLevel::Normal),
            "superscript" => Ok(TextLevel::Superscript),
            _ => Err(unknown("text level", s)),
        }
    }
}

/// Variations of the Markdown syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavour {
    Basic,
    Extended,
    #[default]
    GitHub,
    GitLab,
    PyPI,
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flavour::Basic => "Basic",
            Flavour::Extended => "Extended",
            Flavour::GitHub => "GitHub",
            Flavour::GitLab => "GitLab",
            Flavour::PyPI => "PyPI",
        })
    }
}

impl FromStr for Flavour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Flavour::Basic),
            "extended" => Ok(Flavour::Extended),
            "github" => Ok(Flavour::GitHub),
            "gitlab" => Ok(Flavour::GitLab),
            "pypi" => Ok(Flavour::PyPI),
            _ => Err(unknown("flavour", s)),
        }
    }
}

fn unknown(kind: &'static str, value: &str) -> Error {
    Error::UnknownVariant {
        kind,
        value: value.to_string(),
    }
}
