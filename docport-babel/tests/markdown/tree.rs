//! Tree-level tests: parse real Markdown, run the passes, inspect nodes

use crate::common::fixture;
use docport_babel::format::Format;
use docport_babel::tree::Span;
use docport_babel::visit::{visit, Visit};
use docport_babel::{Kind, MarkdownFormat, Node, NodeData, Pipeline, Tables};

fn transformed(md: &str) -> Node {
    let tables = Tables::standard();
    let mut doc = MarkdownFormat.parse(md);
    Pipeline::new(&tables).transform(&mut doc, |url| url.to_string());
    doc
}

#[test]
fn note_quote_becomes_three_root_paragraphs() {
    let doc = transformed("> **Note** Keep it short.\n");

    assert_eq!(doc.children.len(), 3);
    assert!(doc.children.iter().all(|n| n.is(Kind::Paragraph)));
    let texts: Vec<String> = doc.children.iter().map(Node::plain_text).collect();
    assert_eq!(texts, vec![":::note Note", "Keep it short.", ":::"]);
}

#[test]
fn status_symbols_in_table_cells_are_wrapped() {
    let doc = transformed(&fixture("rule-readme.md"));

    let mut titles = Vec::new();
    collect_spans(&doc, &mut titles);
    assert_eq!(titles, vec!["Standard", "Autofixable"]);
}

#[test]
fn symbol_with_trailing_text_is_left_alone() {
    let doc = transformed("✅ rule\n");
    let mut titles = Vec::new();
    collect_spans(&doc, &mut titles);
    assert!(titles.is_empty());
    assert_eq!(doc.children[0].plain_text(), "✅ rule");
}

#[test]
fn wrapper_markers_are_html_blocks_beside_the_trigger() {
    let doc = transformed("The following patterns are considered problems:\n\n```css\na {}\n```\n");

    let kinds: Vec<Kind> = doc.children.iter().map(Node::kind).collect();
    assert_eq!(kinds, vec![Kind::Paragraph, Kind::Html, Kind::Other, Kind::Html]);
    match &doc.children[1].data {
        NodeData::Html(html) => {
            assert!(html.block);
            assert_eq!(html.literal.trim_end(), "<div class=\"invalid-pattern\">");
        }
        other => panic!("expected html block, found {other:?}"),
    }
}

#[test]
fn callback_inserting_two_siblings_sees_each_once() {
    let mut doc = MarkdownFormat.parse("first\n\nlast\n");

    let mut seen = Vec::new();
    visit(&mut doc, &Kind::Paragraph, |cursor| {
        let text = cursor.node().plain_text();
        if text == "first" {
            let at = cursor.index() + 1;
            let siblings = cursor.siblings_mut();
            siblings.insert(at, Node::paragraph(vec![Node::text("new a")]));
            siblings.insert(at + 1, Node::paragraph(vec![Node::text("new b")]));
        }
        seen.push(text);
        Visit::Continue
    });

    assert_eq!(seen, vec!["first", "new a", "new b", "last"]);
}

fn collect_spans(node: &Node, out: &mut Vec<String>) {
    if let NodeData::Span(Span { title }) = &node.data {
        out.push(title.clone());
    }
    for child in &node.children {
        collect_spans(child, out);
    }
}
