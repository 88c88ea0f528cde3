use crate::entry::Entry;
use crate::error::{Result, TrieError};
use crate::slots::ChildSlots;

/// Stable handle of a node within the [`NodeArena`](crate::arena::NodeArena).
pub(crate) type NodeId = usize;

/// Position of a leaf in the overlay list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Head,
    Tail,
    Entry,
}

/// A leaf: owns a stored entry and links into the sorted overlay list.
///
/// The links carry no ownership; the arena owns every leaf. A leaf other than the head whose
/// `prev` link has been cleared is a tombstone: it has been unlinked from its neighbours but its
/// slot has not been freed yet.
pub(crate) struct LeafData<V> {
    pub(crate) entry: Option<Entry<V>>,
    pub(crate) role: Role,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<V> LeafData<V> {
    #[inline]
    pub(crate) fn is_head(&self) -> bool {
        self.role == Role::Head
    }

    #[inline]
    pub(crate) fn is_tail(&self) -> bool {
        self.role == Role::Tail
    }

    #[inline]
    pub(crate) fn is_sentinel(&self) -> bool {
        self.role != Role::Entry
    }

    #[inline]
    pub(crate) fn is_deleted(&self) -> bool {
        !self.is_head() && self.prev.is_none()
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub(crate) fn previous(&self) -> Option<NodeId> {
        self.prev
    }
}

pub(crate) enum Content<V> {
    Inner(ChildSlots<NodeId>),
    Leaf(LeafData<V>),
}

pub(crate) struct Node<V> {
    /// Parent handle and the slot this node occupies in it. `None` for the root, the sentinels,
    /// and nodes that have been detached.
    pub(crate) parent: Option<(NodeId, usize)>,
    pub(crate) content: Content<V>,
}

impl<V> Node<V> {
    #[inline]
    pub(crate) fn new_inner(width: usize) -> Self {
        Self {
            parent: None,
            content: Content::Inner(ChildSlots::new(width)),
        }
    }

    #[inline]
    pub(crate) fn new_leaf(entry: Entry<V>) -> Self {
        Self::leaf_with(Some(entry), Role::Entry)
    }

    #[inline]
    pub(crate) fn new_sentinel(role: Role) -> Self {
        debug_assert!(role != Role::Entry);
        Self::leaf_with(None, role)
    }

    fn leaf_with(entry: Option<Entry<V>>, role: Role) -> Self {
        Self {
            parent: None,
            content: Content::Leaf(LeafData {
                entry,
                role,
                prev: None,
                next: None,
            }),
        }
    }

    pub(crate) fn value(&self) -> Option<&Entry<V>> {
        let Content::Leaf(leaf) = &self.content else {
            return None;
        };
        leaf.entry.as_ref()
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut Entry<V>> {
        let Content::Leaf(leaf) = &mut self.content else {
            return None;
        };
        leaf.entry.as_mut()
    }

    pub(crate) fn into_value(self) -> Option<Entry<V>> {
        match self.content {
            Content::Leaf(leaf) => leaf.entry,
            Content::Inner(_) => None,
        }
    }

    pub(crate) fn as_leaf(&self) -> Option<&LeafData<V>> {
        match &self.content {
            Content::Leaf(leaf) => Some(leaf),
            Content::Inner(_) => None,
        }
    }

    pub(crate) fn as_leaf_mut(&mut self) -> Option<&mut LeafData<V>> {
        match &mut self.content {
            Content::Leaf(leaf) => Some(leaf),
            Content::Inner(_) => None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(&self.content, Content::Leaf(_))
    }

    pub(crate) fn num_children(&self) -> usize {
        match &self.content {
            Content::Inner(slots) => slots.num_children(),
            Content::Leaf(_) => 0,
        }
    }

    #[inline]
    pub(crate) fn has_children(&self) -> bool {
        self.num_children() > 0
    }

    /// Number of child slots; zero for leaves.
    pub(crate) fn capacity(&self) -> usize {
        match &self.content {
            Content::Inner(slots) => slots.width(),
            Content::Leaf(_) => 0,
        }
    }

    pub(crate) fn child_at(&self, index: usize) -> Result<Option<NodeId>> {
        match &self.content {
            Content::Inner(slots) => slots.seek_child(index),
            Content::Leaf(_) => Err(TrieError::BoundsOutOfRange { index, len: 0 }),
        }
    }

    pub(crate) fn last_child(&self) -> Option<(usize, NodeId)> {
        match &self.content {
            Content::Inner(slots) => slots.last_child(),
            Content::Leaf(_) => None,
        }
    }

    pub(crate) fn iter(&self) -> Box<dyn Iterator<Item = (usize, NodeId)> + '_> {
        match &self.content {
            Content::Inner(slots) => Box::new(slots.iter()),
            Content::Leaf(_) => Box::new(std::iter::empty()),
        }
    }
}
