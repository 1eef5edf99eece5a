//! Link rewriting.
//!
//! Every link url is replaced by `rewriter(url)`. What the rewriter does is
//! the caller's business: it differs per document group.

use crate::tree::{Kind, Node, NodeData};
use crate::visit::{visit, Visit};

/// Rewrite the url of every link under `root`. Returns the number of urls
/// that changed.
pub fn rewrite_links<R>(root: &mut Node, rewriter: R) -> usize
where
    R: Fn(&str) -> String,
{
    let mut changed = 0;
    visit(root, &Kind::Link, |cursor| {
        if let NodeData::Link(link) = &mut cursor.node_mut().data {
            let rewritten = rewriter(&link.url);
            if rewritten != link.url {
                tracing::trace!(from = %link.url, to = %rewritten, "rewrote link");
                link.url = rewritten;
                changed += 1;
            }
        }
        Visit::Continue
    });
    changed
}
