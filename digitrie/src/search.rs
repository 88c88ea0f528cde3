//! Traversal cursor over the branching structure of a trie.
//!
//! A [`SearchContext`] tracks a node and the digit depth at which that node sits. It is a plain
//! stack value borrowing the arena, so nothing survives from one trie operation to the next.

use crate::arena::NodeArena;
use crate::digitizer::Digitizer;
use crate::entry::Entry;
use crate::error::Result;
use crate::node::NodeId;

/// How far a key could be followed down the trie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchResult {
    /// Reached the leaf whose full digit sequence equals the key.
    Matched,
    /// The key's digits ran out on an inner node; the key is a proper prefix of stored keys.
    Prefix,
    /// Reached a leaf before the key's digits ran out; the key extends a stored key.
    Extension,
    /// A slot the key needed was empty.
    Unmatched,
}

/// A node together with the digit depth it sits at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) node: NodeId,
    pub(crate) depth: usize,
}

pub(crate) struct SearchContext<'a, V, D> {
    arena: &'a NodeArena<V>,
    digitizer: &'a D,
    node: NodeId,
    depth: usize,
}

impl<'a, V, D: Digitizer> SearchContext<'a, V, D> {
    /// A context parked on `root` at depth 0.
    pub(crate) fn new(arena: &'a NodeArena<V>, digitizer: &'a D, root: NodeId) -> Self {
        Self::at(arena, digitizer, Position { node: root, depth: 0 })
    }

    pub(crate) fn at(arena: &'a NodeArena<V>, digitizer: &'a D, position: Position) -> Self {
        Self {
            arena,
            digitizer,
            node: position.node,
            depth: position.depth,
        }
    }

    #[inline]
    pub(crate) fn node(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position {
            node: self.node,
            depth: self.depth,
        }
    }

    /// The entry stored at the current position, if it is a live leaf.
    pub(crate) fn entry(&self) -> Option<&'a Entry<V>> {
        self.arena.entry(self.node)
    }

    #[inline]
    pub(crate) fn at_leaf(&self) -> bool {
        self.arena.get(self.node).is_leaf()
    }

    #[inline]
    pub(crate) fn at_root(&self) -> bool {
        self.arena.get(self.node).parent.is_none()
    }

    /// The digit `key` takes at the current depth.
    #[inline]
    pub(crate) fn child_index_of(&self, key: &str) -> Result<usize> {
        self.digitizer.digit_of(key, self.depth)
    }

    /// Moves into child `index` if it exists. Returns false without moving otherwise.
    pub(crate) fn descend_to_index(&mut self, index: usize) -> bool {
        match self.arena.child_at(self.node, index) {
            Ok(Some(child)) => {
                self.node = child;
                self.depth += 1;
                true
            }
            _ => false,
        }
    }

    /// Moves into the child selected by the digit of `key` at the current depth.
    pub(crate) fn descend_to(&mut self, key: &str) -> Result<bool> {
        let index = self.child_index_of(key)?;
        Ok(self.descend_to_index(index))
    }

    /// Moves to the parent. No-op at the root.
    pub(crate) fn ascend(&mut self) {
        if let Some(parent) = self.arena.parent(self.node) {
            self.node = parent;
            self.depth -= 1;
        }
    }

    /// Follows the highest occupied slot down to a leaf: the maximum key of the subtree.
    pub(crate) fn move_to_max_descendant(&mut self) {
        while !self.at_leaf() {
            let Some((index, _)) = self.arena.get(self.node).last_child() else {
                break;
            };
            self.descend_to_index(index);
        }
    }

    /// Walks upwards until some ancestor offers a branch strictly smaller than the one `key`
    /// takes there, and moves into the highest such branch. Stops at the root if there is none.
    pub(crate) fn retrace_to_last_left_fork(&mut self, key: &str) -> Result<()> {
        loop {
            if !self.at_leaf() {
                let index = self.child_index_of(key)?;
                for i in (0..index).rev() {
                    if self.descend_to_index(i) {
                        return Ok(());
                    }
                }
            }

            if self.at_root() {
                return Ok(());
            }
            self.ascend();
        }
    }

    /// Moves to the in-order predecessor of `key`, given the outcome of a search for it that left
    /// the context where it is. Returns false if no stored key precedes `key`.
    pub(crate) fn move_to_predecessor(&mut self, key: &str, result: SearchResult) -> Result<bool> {
        if self.at_leaf() && result == SearchResult::Extension {
            return Ok(true);
        }

        self.retrace_to_last_left_fork(key)?;

        if self.at_root() {
            return Ok(false);
        }
        if !self.at_leaf() {
            self.move_to_max_descendant();
        }
        Ok(true)
    }

    /// True if, under a prefix-free digitizer, the current position is the end of key child of
    /// its parent.
    pub(crate) fn processed_end_of_string(&self) -> bool {
        self.digitizer.is_prefix_free()
            && matches!(
                self.arena.get(self.node).parent,
                Some((_, crate::digitizer::END_OF_KEY))
            )
    }

    /// Calls `visit` with every entry below the current position, in ascending slot order.
    pub(crate) fn visit_subtree<F>(&self, visit: &mut F)
    where
        F: FnMut(&'a Entry<V>),
    {
        visit_below(self.arena, self.node, visit);
    }

    /// Appends the key of every entry below the current position to `sink`, in sorted order.
    pub(crate) fn entries_in_subtree<S>(&self, sink: &mut S)
    where
        S: Extend<String>,
    {
        self.visit_subtree(&mut |entry: &Entry<V>| {
            sink.extend(std::iter::once(entry.key().to_string()))
        });
    }
}

fn visit_below<'a, V, F>(arena: &'a NodeArena<V>, node: NodeId, visit: &mut F)
where
    F: FnMut(&'a Entry<V>),
{
    let n = arena.get(node);
    if n.is_leaf() {
        if let Some(entry) = arena.entry(node) {
            visit(entry);
        }
        return;
    }
    for (_, child) in n.iter() {
        visit_below(arena, child, visit);
    }
}
