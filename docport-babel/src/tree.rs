//! Core data structures for the document tree.
//!
//! Passes only care about a handful of node kinds (paragraphs, headings,
//! links, block quotes, text runs). Everything else the parser produces is
//! carried opaquely in [`NodeData::Other`] so the serializer can put it back.

use comrak::nodes::NodeValue;

/// One element of a parsed document. Children are owned and kept in
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub data: NodeData,
    pub children: Vec<Node>,
}

/// The payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Root,
    Paragraph,
    Heading(Heading),
    Text(String),
    Strong,
    Emphasis,
    Link(Link),
    BlockQuote,
    Html(Html),
    /// Inline wrapper rendered as `<span title="...">children</span>`.
    Span(Span),
    /// Anything the passes never inspect.
    Other(NodeValue),
}

/// Represents a heading with a specific level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub setext: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub title: String,
}

/// Raw HTML. `block` distinguishes an HTML block from inline HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html {
    pub literal: String,
    pub block: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub title: String,
}

/// Fieldless tag of a [`NodeData`], used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Root,
    Paragraph,
    Heading,
    Text,
    Strong,
    Emphasis,
    Link,
    BlockQuote,
    Html,
    Span,
    Other,
}

impl NodeData {
    pub fn kind(&self) -> Kind {
        match self {
            NodeData::Root => Kind::Root,
            NodeData::Paragraph => Kind::Paragraph,
            NodeData::Heading(_) => Kind::Heading,
            NodeData::Text(_) => Kind::Text,
            NodeData::Strong => Kind::Strong,
            NodeData::Emphasis => Kind::Emphasis,
            NodeData::Link(_) => Kind::Link,
            NodeData::BlockQuote => Kind::BlockQuote,
            NodeData::Html(_) => Kind::Html,
            NodeData::Span(_) => Kind::Span,
            NodeData::Other(_) => Kind::Other,
        }
    }
}

impl Node {
    pub fn new(data: NodeData, children: Vec<Node>) -> Self {
        Node { data, children }
    }

    pub fn root(children: Vec<Node>) -> Self {
        Node::new(NodeData::Root, children)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::new(NodeData::Paragraph, children)
    }

    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::new(
            NodeData::Heading(Heading {
                level,
                setext: false,
            }),
            children,
        )
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::new(NodeData::Text(value.into()), Vec::new())
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::new(NodeData::Strong, children)
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::new(NodeData::Emphasis, children)
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(
            NodeData::Link(Link {
                url: url.into(),
                title: String::new(),
            }),
            children,
        )
    }

    pub fn block_quote(children: Vec<Node>) -> Self {
        Node::new(NodeData::BlockQuote, children)
    }

    pub fn html_block(literal: impl Into<String>) -> Self {
        Node::new(
            NodeData::Html(Html {
                literal: literal.into(),
                block: true,
            }),
            Vec::new(),
        )
    }

    pub fn span(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(
            NodeData::Span(Span {
                title: title.into(),
            }),
            children,
        )
    }

    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.kind() == kind
    }

    /// Text payload of leaf kinds.
    pub fn value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(value) => Some(value),
            NodeData::Html(html) => Some(&html.literal),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.data {
            NodeData::Link(link) => Some(&link.url),
            _ => None,
        }
    }

    /// Value of the first text node in this subtree, in document order.
    pub fn first_text(&self) -> Option<&str> {
        if let NodeData::Text(value) = &self.data {
            return Some(value);
        }
        self.children.iter().find_map(Node::first_text)
    }

    /// Concatenated text of every text node in this subtree.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match &node.data {
        NodeData::Text(value) => out.push_str(value),
        _ => {
            for child in &node.children {
                collect_text(child, out);
            }
        }
    }
}
