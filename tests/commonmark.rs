//! Rendered documents parsed back with pulldown-cmark.

use pulldown_cmark::{Event, HeadingLevel, LinkType, MetadataBlockKind, Options, Parser, Tag};
use yamdog::{
    Alignment, Document, Element, Footnote, Heading, Link, Paragraph, Table, Text, Toc,
    make_checklist,
};

fn events(markdown: &str) -> Vec<Event<'_>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    options.insert(Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS);
    Parser::new_ext(markdown, options).collect()
}

#[test]
fn pretty_and_compact_tables_parse() {
    let table = Table::new(["a", "b", "c"])
        .row([1, 2, 3])
        .alignment([Alignment::Left, Alignment::Center, Alignment::Right]);
    for markdown in [table.to_string(), table.compact(true).to_string()] {
        let parsed = events(&markdown);
        let alignments = parsed.iter().find_map(|event| match event {
            Event::Start(Tag::Table(alignments)) => Some(alignments.clone()),
            _ => None,
        });
        assert_eq!(
            alignments,
            Some(vec![
                pulldown_cmark::Alignment::Left,
                pulldown_cmark::Alignment::Center,
                pulldown_cmark::Alignment::Right,
            ]),
            "table not recognised in:\n{markdown}"
        );
        let cells = parsed
            .iter()
            .filter(|event| matches!(event, Event::Start(Tag::TableCell)))
            .count();
        assert_eq!(cells, 6);
    }
}

#[test]
fn footnotes_parse() {
    let note = Footnote::new("note");
    let document = Document::from_items([Paragraph::new(vec![
        Element::from("text"),
        note.clone().into(),
        Element::from(" again"),
        note.into(),
    ])]);
    let markdown = document.to_markdown();
    let parsed = events(&markdown);

    let references = parsed
        .iter()
        .filter(|event| matches!(event, Event::FootnoteReference(label) if &**label == "1"))
        .count();
    assert_eq!(references, 2);
    assert!(
        parsed
            .iter()
            .any(|event| matches!(event, Event::Start(Tag::FootnoteDefinition(label)) if &**label == "1"))
    );
}

#[test]
fn reference_links_parse() {
    let link = Link::with_content("https://example.com", "example").title("Example");
    let markdown = Document::from_items([link]).to_markdown();
    let parsed = events(&markdown);
    let found = parsed.iter().any(|event| {
        matches!(
            event,
            Event::Start(Tag::Link { link_type: LinkType::Reference, dest_url, title, .. })
                if &**dest_url == "https://example.com" && &**title == "Example"
        )
    });
    assert!(found, "reference link not recognised in:\n{markdown}");
}

#[test]
fn headings_and_toc_links_parse() {
    let document = Document::from_items(vec![
        Element::from(Toc::default()),
        Heading::new("Intro", 1).unwrap().into(),
        Heading::new("Usage", 2).unwrap().alt_style(true).into(),
    ]);
    let markdown = document.to_markdown();
    let parsed = events(&markdown);

    let levels: Vec<HeadingLevel> = parsed
        .iter()
        .filter_map(|event| match event {
            Event::Start(Tag::Heading { level, .. }) => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![HeadingLevel::H1, HeadingLevel::H2]);

    let anchors: Vec<String> = parsed
        .iter()
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(anchors, vec!["#intro", "#usage"]);
}

#[test]
fn front_matter_parses_as_metadata() {
    let yaml = Document::builder().header("yaml", "title: x").item("body").build().unwrap();
    assert!(events(&yaml.to_markdown()).iter().any(|event| matches!(
        event,
        Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle))
    )));

    let toml = Document::builder().header("toml", "title = 'x'").item("body").build().unwrap();
    assert!(events(&toml.to_markdown()).iter().any(|event| matches!(
        event,
        Event::Start(Tag::MetadataBlock(MetadataBlockKind::PlusesStyle))
    )));
}

#[test]
fn checklists_and_styles_parse() {
    let checklist = make_checklist([(true, "done"), (false, "todo")]);
    let markers: Vec<bool> = events(&checklist.to_string())
        .iter()
        .filter_map(|event| match event {
            Event::TaskListMarker(checked) => Some(*checked),
            _ => None,
        })
        .collect();
    assert_eq!(markers, vec![true, false]);

    let styled = Text::new("gone").strikethrough().bold().to_string();
    let parsed = events(&styled);
    assert!(parsed.iter().any(|event| matches!(event, Event::Start(Tag::Strong))));
    assert!(parsed.iter().any(|event| matches!(event, Event::Start(Tag::Strikethrough))));
}
