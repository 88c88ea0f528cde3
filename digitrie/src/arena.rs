//! Ownership of every node and leaf of a trie.
//!
//! Parent, child and overlay-list links are plain [`NodeId`] handles into a [`Slab`], which
//! keeps handles stable for as long as the node lives. The arena owns the nodes; no link owns
//! anything.

use slab::Slab;

use crate::entry::Entry;
use crate::error::{Result, TrieError};
use crate::node::{LeafData, Node, NodeId};

pub(crate) struct NodeArena<V> {
    nodes: Slab<Node<V>>,
}

impl<V> NodeArena<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn insert(&mut self, node: Node<V>) -> NodeId {
        self.nodes.insert(node)
    }

    /// Releases the slot of `id`, returning the node that occupied it.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<V> {
        self.nodes.remove(id)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id]
    }

    /// Number of allocated nodes, sentinels and tombstones included.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn leaf(&self, id: NodeId) -> &LeafData<V> {
        match self.nodes[id].as_leaf() {
            Some(leaf) => leaf,
            None => unreachable!("overlay list link to an inner node"),
        }
    }

    pub(crate) fn leaf_mut(&mut self, id: NodeId) -> &mut LeafData<V> {
        match self.nodes[id].as_leaf_mut() {
            Some(leaf) => leaf,
            None => unreachable!("overlay list link to an inner node"),
        }
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent.map(|(parent, _)| parent)
    }

    #[inline]
    pub(crate) fn child_at(&self, parent: NodeId, index: usize) -> Result<Option<NodeId>> {
        self.nodes[parent].child_at(index)
    }

    /// Attaches `child` to slot `index` of `parent` and points the child back at it.
    ///
    /// Fails if `index` is outside `[0, capacity)` or the slot is taken; leaves have no
    /// capacity at all.
    pub(crate) fn add_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        match &mut self.nodes[parent].content {
            crate::node::Content::Inner(slots) => slots.add_child(index, child)?,
            crate::node::Content::Leaf(_) => {
                return Err(TrieError::BoundsOutOfRange { index, len: 0 })
            }
        }
        self.nodes[child].parent = Some((parent, index));
        Ok(())
    }

    /// Empties slot `index` of `parent`. Returns false if the slot was already empty or out of
    /// bounds.
    pub(crate) fn remove_child_at(&mut self, parent: NodeId, index: usize) -> bool {
        let removed = match &mut self.nodes[parent].content {
            crate::node::Content::Inner(slots) => slots.delete_child(index),
            crate::node::Content::Leaf(_) => None,
        };
        match removed {
            Some(child) => {
                if let Some(node) = self.nodes.get_mut(child) {
                    node.parent = None;
                }
                true
            }
            None => false,
        }
    }

    /// Splices `leaf` into the overlay list immediately after `pivot`.
    pub(crate) fn add_after(&mut self, leaf: NodeId, pivot: NodeId) {
        let next = self.leaf(pivot).next;
        {
            let l = self.leaf_mut(leaf);
            l.prev = Some(pivot);
            l.next = next;
        }
        self.leaf_mut(pivot).next = Some(leaf);
        if let Some(next) = next {
            self.leaf_mut(next).prev = Some(leaf);
        }
    }

    /// Unlinks `leaf` from its neighbours and marks it as a tombstone. The leaf keeps its `next`
    /// link so a cursor parked on it can still move forward.
    pub(crate) fn remove_from_list(&mut self, leaf: NodeId) {
        let (prev, next) = {
            let l = self.leaf(leaf);
            (l.prev, l.next)
        };
        if let Some(prev) = prev {
            self.leaf_mut(prev).next = next;
        }
        if let Some(next) = next {
            self.leaf_mut(next).prev = prev;
        }
        self.leaf_mut(leaf).prev = None;
    }

    pub(crate) fn entry(&self, id: NodeId) -> Option<&Entry<V>> {
        self.nodes[id].value()
    }
}
