//! Markdown parsing (Markdown → document tree)
//!
//! Pipeline: Markdown string → Comrak AST → [`Node`] tree

use super::default_comrak_options;
use crate::tree::{Heading, Html, Link, Node, NodeData};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena};

/// Parse a Markdown string into a document tree rooted at [`NodeData::Root`].
pub fn parse_from_markdown(source: &str) -> Node {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);
    convert_node(root)
}

/// Recursively copy a Comrak node and its children into owned nodes
fn convert_node<'a>(node: &'a AstNode<'a>) -> Node {
    let data = match &node.data.borrow().value {
        NodeValue::Document => NodeData::Root,
        NodeValue::Paragraph => NodeData::Paragraph,
        NodeValue::Heading(heading) => NodeData::Heading(Heading {
            level: heading.level,
            setext: heading.setext,
        }),
        NodeValue::Text(text) => NodeData::Text(text.clone()),
        NodeValue::Strong => NodeData::Strong,
        NodeValue::Emph => NodeData::Emphasis,
        NodeValue::Link(link) => NodeData::Link(Link {
            url: link.url.clone(),
            title: link.title.clone(),
        }),
        NodeValue::BlockQuote => NodeData::BlockQuote,
        NodeValue::HtmlBlock(html) => NodeData::Html(Html {
            literal: html.literal.clone(),
            block: true,
        }),
        NodeValue::HtmlInline(literal) => NodeData::Html(Html {
            literal: literal.clone(),
            block: false,
        }),
        // Lists, code, tables, images, breaks: carried through untouched
        other => NodeData::Other(other.clone()),
    };

    let children = node.children().map(convert_node).collect();
    Node::new(data, children)
}
