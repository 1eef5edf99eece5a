//! Depth-first traversal with in-place mutation
//!
//!     [`visit`] walks a tree in pre-order and hands every node accepted by a
//!     [`Matcher`] to a callback, together with its position in the parent.
//!     The callback may edit the parent's child list at or after that
//!     position, which is what makes splicing passes possible.
//!
//! Walk rules
//!
//!     - The child vector is re-read after every callback. Its length is
//!       never cached, so nodes inserted after the current index are visited
//!       once, in document order, and nodes before it are never revisited.
//!     - The subtree walked is the one of whatever node sits at the index
//!       once the callback returns (a replacement, if any).
//!     - If the callback removes the current node through the [`Cursor`],
//!       the walk resumes at the same index.
//!     - The root itself is never offered to the callback.

use crate::tree::{Kind, Node};

/// What the walk does after a callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Descend into the node at the current index, then move on.
    Continue,
    /// Do not descend into the node at the current index.
    Skip,
    /// End the whole walk.
    Stop,
}

/// Selects the nodes a visitor is called for.
pub trait Matcher {
    fn matches(&self, node: &Node) -> bool;
}

impl Matcher for Kind {
    fn matches(&self, node: &Node) -> bool {
        node.kind() == *self
    }
}

/// Matches any of a set of kinds.
#[derive(Debug, Clone, Copy)]
pub struct AnyKind<'a>(pub &'a [Kind]);

impl Matcher for AnyKind<'_> {
    fn matches(&self, node: &Node) -> bool {
        self.0.contains(&node.kind())
    }
}

impl<F> Matcher for F
where
    F: Fn(&Node) -> bool,
{
    fn matches(&self, node: &Node) -> bool {
        self(node)
    }
}

/// Position of the visited node: `(node, index, parent)`.
pub struct Cursor<'a> {
    parent: &'a mut Node,
    index: usize,
    removed: bool,
}

impl<'a> Cursor<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn node(&self) -> &Node {
        &self.parent.children[self.index]
    }

    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.parent.children[self.index]
    }

    pub fn parent(&self) -> &Node {
        &*self.parent
    }

    /// The parent's live child list. Edits must stay at or after [`Cursor::index`].
    pub fn siblings_mut(&mut self) -> &mut Vec<Node> {
        &mut self.parent.children
    }

    /// Swap the current node for `nodes` (possibly none) at the same index.
    pub fn replace_with(&mut self, nodes: Vec<Node>) {
        self.removed = nodes.is_empty();
        let index = self.index;
        self.parent.children.splice(index..=index, nodes);
    }

    pub fn remove(&mut self) -> Node {
        self.removed = true;
        self.parent.children.remove(self.index)
    }
}

/// Walk `root` in pre-order, calling `visitor` for each node `matcher`
/// accepts. Returns the number of callback invocations.
pub fn visit<M, F>(root: &mut Node, matcher: &M, mut visitor: F) -> usize
where
    M: Matcher + ?Sized,
    F: FnMut(&mut Cursor<'_>) -> Visit,
{
    let mut calls = 0;
    walk(root, matcher, &mut visitor, &mut calls);
    calls
}

/// Returns `false` once a visitor asked to stop.
fn walk<M, F>(parent: &mut Node, matcher: &M, visitor: &mut F, calls: &mut usize) -> bool
where
    M: Matcher + ?Sized,
    F: FnMut(&mut Cursor<'_>) -> Visit,
{
    let mut index = 0;
    while index < parent.children.len() {
        let mut action = Visit::Continue;

        if matcher.matches(&parent.children[index]) {
            *calls += 1;
            let mut cursor = Cursor {
                parent: &mut *parent,
                index,
                removed: false,
            };
            action = visitor(&mut cursor);
            if cursor.removed {
                if action == Visit::Stop {
                    return false;
                }
                continue;
            }
        }

        match action {
            Visit::Stop => return false,
            Visit::Skip => {}
            Visit::Continue => {
                if let Some(child) = parent.children.get_mut(index) {
                    if !walk(child, matcher, visitor, calls) {
                        return false;
                    }
                }
            }
        }

        index += 1;
    }
    true
}
