//! Symbol accessibility.
//!
//! Rule tables mark rules with bare emoji. A text run consisting of exactly
//! one known symbol is wrapped in a titled span so screen readers and hover
//! tooltips get a word for it.

use crate::tables::Tables;
use crate::tree::{Kind, Node};
use crate::visit::{visit, Visit};

/// Wrap every text node whose whole value is a known symbol. Returns the
/// number of symbols wrapped.
pub fn annotate_symbols(root: &mut Node, tables: &Tables) -> usize {
    let mut annotated = 0;
    visit(root, &Kind::Text, |cursor| {
        let Some(label) = cursor.node().value().and_then(|v| tables.symbol_label(v)) else {
            return Visit::Continue;
        };
        let symbol = cursor.node().clone();
        cursor.replace_with(vec![Node::span(label, vec![symbol])]);
        annotated += 1;
        // The span holds the same text node; descending would wrap it again.
        Visit::Skip
    });
    annotated
}
