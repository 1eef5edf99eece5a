//! Admonition conversion.
//!
//! GitHub style callouts
//!
//!     > **Note** Something to keep in mind.
//!
//! become directive blocks
//!
//!     :::note Note
//!
//!     Something to keep in mind.
//!
//!     :::
//!
//! Only labels present in [`Tables`] are converted; any other block quote is
//! left as it is.

use crate::tables::Tables;
use crate::tree::{Kind, Node, NodeData};
use crate::visit::{visit, Visit};
use comrak::nodes::NodeValue;

pub const CLOSER: &str = ":::";

/// Convert every recognised callout block quote. Returns the number converted.
pub fn convert_admonitions(root: &mut Node, tables: &Tables) -> usize {
    let mut converted = 0;
    visit(root, &Kind::BlockQuote, |cursor| {
        let Some((kind, label)) = callout(cursor.node(), tables) else {
            return Visit::Continue;
        };

        let mut blocks = std::mem::take(&mut cursor.node_mut().children).into_iter();
        let mut content = blocks.next().map(|p| p.children).unwrap_or_default();
        // Drop the bold label itself.
        content.remove(0);
        trim_leading_whitespace(&mut content);

        let mut replacement = vec![
            Node::paragraph(vec![Node::text(format!(":::{kind} {label}"))]),
            Node::paragraph(content),
        ];
        replacement.extend(blocks);
        replacement.push(Node::paragraph(vec![Node::text(CLOSER)]));

        tracing::trace!(kind, "converted admonition");
        cursor.replace_with(replacement);
        converted += 1;
        Visit::Skip
    });
    converted
}

/// `(kind, label)` when the quote opens with a paragraph starting with a
/// bold label the table knows.
fn callout(quote: &Node, tables: &Tables) -> Option<(&'static str, String)> {
    let paragraph = quote.children.first().filter(|n| n.is(Kind::Paragraph))?;
    let strong = paragraph.children.first().filter(|n| n.is(Kind::Strong))?;
    let label = strong.plain_text();
    let kind = tables.admonition_kind(&label)?;
    Some((kind, label))
}

/// Trim the first inline segment only. A leading line break counts as
/// whitespace.
fn trim_leading_whitespace(content: &mut Vec<Node>) {
    while content.first().is_some_and(is_break) {
        content.remove(0);
    }
    if let Some(Node {
        data: NodeData::Text(value),
        ..
    }) = content.first_mut()
    {
        let cut = value.len() - value.trim_start().len();
        value.replace_range(..cut, "");
        if value.is_empty() {
            content.remove(0);
        }
    }
}

fn is_break(node: &Node) -> bool {
    matches!(
        node.data,
        NodeData::Other(NodeValue::SoftBreak | NodeValue::LineBreak)
    )
}
