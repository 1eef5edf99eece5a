//! Markdown serialization (document tree → Markdown)
//!
//! Pipeline: [`Node`] tree → Comrak AST → Markdown string (comrak's serializer)

use super::default_comrak_options;
use crate::error::FormatError;
use crate::tree::{Node, NodeData};
use comrak::nodes::{Ast, AstNode, NodeHeading, NodeHtmlBlock, NodeLink, NodeValue};
use comrak::{format_commonmark, Arena};
use std::cell::RefCell;

/// Serialize a document tree to Markdown
pub fn serialize_to_markdown(doc: &Node) -> Result<String, FormatError> {
    let arena = Arena::new();
    let root = alloc(&arena, NodeValue::Document);
    append_children(&arena, root, doc);

    let mut output = Vec::new();
    let options = default_comrak_options();
    format_commonmark(root, &options, &mut output)
        .map_err(|e| FormatError::Serialization(format!("Comrak serialization failed: {e}")))?;

    let markdown = String::from_utf8(output)
        .map_err(|e| FormatError::Serialization(format!("UTF-8 conversion failed: {e}")))?;

    // Remove Comrak's "end list" HTML comments which appear between consecutive lists
    Ok(markdown.replace("<!-- end list -->\n\n", ""))
}

fn alloc<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn append_children<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, node: &Node) {
    for child in &node.children {
        append_node(arena, parent, child);
    }
}

fn append_node<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, node: &Node) {
    let value = match &node.data {
        // A nested root has no Markdown form; splice its children in place
        NodeData::Root => {
            append_children(arena, parent, node);
            return;
        }
        NodeData::Span(span) => {
            let title = span.title.replace('"', "&quot;");
            parent.append(alloc(
                arena,
                NodeValue::HtmlInline(format!("<span title=\"{title}\">")),
            ));
            append_children(arena, parent, node);
            parent.append(alloc(arena, NodeValue::HtmlInline("</span>".to_string())));
            return;
        }
        NodeData::Paragraph => NodeValue::Paragraph,
        NodeData::Heading(heading) => NodeValue::Heading(NodeHeading {
            level: heading.level.clamp(1, 6),
            setext: heading.setext,
        }),
        NodeData::Text(text) => NodeValue::Text(text.clone()),
        NodeData::Strong => NodeValue::Strong,
        NodeData::Emphasis => NodeValue::Emph,
        NodeData::Link(link) => NodeValue::Link(NodeLink {
            url: link.url.clone(),
            title: link.title.clone(),
        }),
        NodeData::BlockQuote => NodeValue::BlockQuote,
        NodeData::Html(html) if html.block => NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 0,
            literal: html.literal.clone(),
        }),
        NodeData::Html(html) => NodeValue::HtmlInline(html.literal.clone()),
        NodeData::Other(value) => value.clone(),
    };

    let ast_node = alloc(arena, value);
    parent.append(ast_node);
    append_children(arena, ast_node, node);
}
