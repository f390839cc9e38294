//! String helpers shared by the element renderers.

use std::sync::LazyLock;

use regex::Regex;

/// Four spaces: one nesting level for listings and the table of contents.
pub const INDENT: &str = "    ";

static LEADING_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\n\s*").expect("valid leading-break pattern"));

static TRAILING_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*$").expect("valid trailing-break pattern"));

static INNER_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("valid inner-break pattern"));

static BACKTICK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`+").expect("valid backtick pattern"));

/// Normalise a raw text fragment written as an indented multi-line literal.
///
/// A leading and a trailing line break (with the whitespace around them) are
/// removed, and every remaining whitespace run containing a line break
/// collapses to a single space. Whitespace without a line break is kept.
///
/// ```
/// use yamdog::util::sanitize;
///
/// assert_eq!(sanitize("\n    first line\n    second line\n"), "first line second line");
/// assert_eq!(sanitize(" kept "), " kept ");
/// ```
pub fn sanitize(text: &str) -> String {
    let text = LEADING_BREAK_RE.replace(text, "");
    let text = TRAILING_BREAK_RE.replace(&text, "");
    INNER_BREAK_RE.replace_all(&text, " ").into_owned()
}

/// Anchor slug for a heading, as GitHub and GitLab generate it.
///
/// Spaces become hyphens, ASCII punctuation (hyphens included) is dropped and
/// the result is lowercased. No `#` is prepended.
///
/// ```
/// use yamdog::util::heading_anchor;
///
/// assert_eq!(heading_anchor("Hello, World!"), "hello-world");
/// assert_eq!(heading_anchor("Pre-built [docs]"), "prebuilt-docs");
/// ```
pub fn heading_anchor(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_ascii_punctuation() => None,
            c => Some(c),
        })
        .collect::<String>()
        .to_lowercase()
}

/// Visible link text for a heading: square brackets would end the link label.
pub fn strip_brackets(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

/// Fence length for a code block holding `text`.
///
/// Three backticks unless the content already holds a longer run, in which
/// case one more than the longest run.
pub fn fence_length(text: &str) -> usize {
    let longest = BACKTICK_RUN_RE
        .find_iter(text)
        .map(|m| m.len())
        .max()
        .unwrap_or(0);
    if longest > 2 { longest + 1 } else { 3 }
}

/// Indent every line after the first with `indent`.
pub fn indent_continuation(text: &str, indent: &str) -> String {
    text.replace('\n', &format!("\n{indent}"))
}
