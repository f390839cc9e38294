//! Property-based tests using proptest.

use proptest::prelude::*;
use yamdog::{Document, Element, Footnote, Link, Paragraph, Table};

/// Cell text without pipes or line breaks.
fn cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,12}"
}

proptest! {
    /// Rendering never modifies the tree, so a second render is identical.
    #[test]
    fn rendering_is_repeatable(
        texts in prop::collection::vec("[a-z ]{1,20}", 0..6),
        cite in prop::collection::vec(0usize..3, 0..8),
    ) {
        let notes: Vec<Footnote> = (0..3).map(|i| Footnote::new(format!("note {i}"))).collect();
        let mut content: Vec<Element> = texts.into_iter().map(Element::from).collect();
        content.extend(cite.into_iter().map(|i| Element::from(notes[i].clone())));
        let document = Document::from_items(content);
        let first = document.to_markdown();
        let second = document.to_markdown();
        let explicit = document.render(&document.prepare());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &explicit);
    }

    /// Every pretty row has as many cells as the widest input row.
    #[test]
    fn pretty_rows_have_equal_cell_counts(
        header in prop::collection::vec(cell(), 0..5),
        rows in prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..5),
    ) {
        let width = rows.iter().map(Vec::len).chain([header.len()]).max().unwrap_or(0);
        prop_assume!(width > 0);
        let mut table = Table::new(header);
        for row in rows {
            table.append(row);
        }
        let rendered = table.to_string();
        for line in rendered.lines() {
            prop_assert!(line.starts_with("| ") && line.ends_with(" |"), "bad line {:?}", line);
            prop_assert_eq!(line.matches('|').count(), width + 1, "line {:?}", line);
        }
    }

    /// Footnotes are numbered in first-citation order, one entry per content.
    #[test]
    fn footnotes_numbered_by_first_citation(cite in prop::collection::vec(0usize..4, 1..10)) {
        let notes: Vec<Footnote> = (0..4).map(|i| Footnote::new(format!("n{i}"))).collect();
        let document: Document = cite.iter().map(|&i| notes[i].clone()).collect();
        let plan = document.prepare();

        let mut order: Vec<usize> = Vec::new();
        for &i in &cite {
            if !order.contains(&i) {
                order.push(i);
            }
        }
        prop_assert_eq!(plan.footnote_count(), order.len());
        for (position, &i) in order.iter().enumerate() {
            prop_assert_eq!(plan.footnote_index(&notes[i]), Some(position + 1));
        }
    }

    /// Links with the same target and title share one reference entry.
    #[test]
    fn equal_reference_keys_share_an_entry(
        targets in prop::collection::vec(0usize..3, 1..8),
    ) {
        let links: Vec<Link> = targets
            .iter()
            .map(|&t| Link::with_content(format!("url{t}"), "text").title(format!("title{t}")))
            .collect();
        let document = Document::from_items([Paragraph::new(links.clone())]);
        let plan = document.prepare();

        let mut distinct = targets.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(plan.reference_count(), distinct.len());
        for (a, link_a) in targets.iter().zip(&links) {
            for (b, link_b) in targets.iter().zip(&links) {
                if a == b {
                    prop_assert_eq!(plan.reference_index(link_a), plan.reference_index(link_b));
                }
            }
        }
        let rendered = document.to_markdown();
        let reference_lines = rendered
            .lines()
            .filter(|line| line.starts_with('[') && line.contains("]: <"))
            .count();
        prop_assert_eq!(reference_lines, distinct.len());
    }

    /// Raw text never panics the sanitiser or the document renderer.
    #[test]
    fn arbitrary_raw_text_renders(input in "\\PC{0,200}") {
        let document = Document::from_items([input.as_str()]);
        let _ = document.to_markdown();
    }
}
