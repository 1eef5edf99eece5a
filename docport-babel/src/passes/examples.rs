//! Example block wrapping.
//!
//! Rule pages introduce their examples with a fixed sentence, e.g.
//! "The following patterns are considered problems:" or the same sentence
//! with an emphasized *not*. Everything after such a trigger, up to the next
//! trigger or heading, is wrapped in a `<div>` whose class says whether the
//! examples are valid or invalid.

use crate::tree::{Kind, Node, NodeData};
use crate::visit::{visit, Visit};

const TRIGGERS: [&str; 2] = [
    "The following patterns are considered problems:",
    "The following pattern is considered a problem:",
];

pub const VALID_CLASS: &str = "valid-pattern";
pub const INVALID_CLASS: &str = "invalid-pattern";

const CLOSE_MARKER: &str = "</div>\n";

/// Wrap the examples following every trigger paragraph. Returns the number
/// of triggers wrapped.
pub fn wrap_examples(root: &mut Node) -> usize {
    let mut wrapped = 0;
    visit(root, &is_trigger, |cursor| {
        let class = example_class(cursor.node());
        let at = cursor.index();
        let siblings = cursor.siblings_mut();

        siblings.insert(at + 1, open_marker(class));
        let close_at = siblings[at + 2..]
            .iter()
            .position(is_boundary)
            .map_or(siblings.len(), |offset| at + 2 + offset);
        siblings.insert(close_at, Node::html_block(CLOSE_MARKER));

        tracing::trace!(class, wrapped = close_at - at - 2, "wrapped examples");
        wrapped += 1;
        Visit::Skip
    });
    wrapped
}

/// A paragraph whose first and last text runs read as a trigger sentence.
/// Whatever sits between them (the emphasized "not") is ignored here.
pub fn is_trigger(node: &Node) -> bool {
    if !node.is(Kind::Paragraph) {
        return false;
    }
    match trigger_text(node) {
        Some(text) => TRIGGERS.contains(&text.as_str()),
        None => false,
    }
}

fn trigger_text(paragraph: &Node) -> Option<String> {
    let first = text_value(paragraph.children.first()?)?;
    let joined = if paragraph.children.len() == 1 {
        first.to_string()
    } else {
        let last = text_value(paragraph.children.last()?)?;
        format!("{first}{last}")
    };
    Some(joined.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn text_value(node: &Node) -> Option<&str> {
    match &node.data {
        NodeData::Text(value) => Some(value),
        _ => None,
    }
}

/// `valid-pattern` when the trigger's second inline run starts with "not".
fn example_class(trigger: &Node) -> &'static str {
    match trigger.children.get(1).and_then(Node::first_text) {
        Some("not") => VALID_CLASS,
        _ => INVALID_CLASS,
    }
}

fn is_boundary(node: &Node) -> bool {
    node.is(Kind::Heading) || is_trigger(node)
}

fn open_marker(class: &str) -> Node {
    Node::html_block(format!("<div class=\"{class}\">\n"))
}
