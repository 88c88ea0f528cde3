use std::iter::FusedIterator;

use tracing::trace;

use crate::arena::NodeArena;
use crate::entry::Entry;
use crate::node::NodeId;
use crate::trie::Trie;

/// Borrowing iterator over the entries of a trie in sorted order, following the overlay list
/// from both ends.
pub struct Iter<'a, V> {
    arena: &'a NodeArena<V>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(arena: &'a NodeArena<V>, head: NodeId, tail: NodeId, len: usize) -> Self {
        Self {
            arena,
            front: head,
            back: tail,
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.front = self.arena.leaf(self.front).next()?;
        self.remaining -= 1;
        self.arena.entry(self.front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.arena.leaf(self.back).previous()?;
        self.remaining -= 1;
        self.arena.entry(self.back)
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// A forward cursor over the overlay list that can remove the entry it is parked on.
///
/// Removing leaves the cursor on a tombstone: the leaf is already gone from the tree and the
/// list, but keeps its forward link so the cursor can still advance. The tombstone is released
/// when the cursor moves past it or is dropped.
///
/// ```rust
/// use digitrie::Trie;
///
/// let mut trie = Trie::<()>::new();
/// trie.add_all(["apple", "avocado", "banana", "cherry"]).unwrap();
///
/// let mut cursor = trie.iterate();
/// while let Some(entry) = cursor.next() {
///     if entry.key().starts_with('a') {
///         cursor.remove();
///     }
/// }
/// drop(cursor);
///
/// let keys: Vec<&str> = trie.keys().collect();
/// assert_eq!(keys, vec!["banana", "cherry"]);
/// ```
pub struct Cursor<'a, V, D> {
    trie: &'a mut Trie<V, D>,
    position: NodeId,
}

impl<'a, V, D> Cursor<'a, V, D> {
    pub(crate) fn new(trie: &'a mut Trie<V, D>) -> Self {
        let position = trie.head;
        Self { trie, position }
    }

    /// True if advancing would land on an entry.
    pub fn has_next(&self) -> bool {
        let arena = &self.trie.arena;
        if arena.leaf(self.position).is_tail() {
            return false;
        }
        let mut next = arena.leaf(self.position).next();
        while let Some(id) = next {
            let leaf = arena.leaf(id);
            if !leaf.is_deleted() {
                return !leaf.is_tail();
            }
            next = leaf.next();
        }
        false
    }

    /// Moves to the next entry and returns it, releasing any tombstones passed over. Returns
    /// `None` once the end is reached.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Entry<V>> {
        let current = self.position;
        let (is_tail, is_deleted, mut next) = {
            let leaf = self.trie.arena.leaf(current);
            (leaf.is_tail(), leaf.is_deleted(), leaf.next()?)
        };
        if is_tail {
            return None;
        }
        if is_deleted {
            self.release(current);
        }
        while self.trie.arena.leaf(next).is_deleted() {
            let after = self.trie.arena.leaf(next).next()?;
            self.release(next);
            next = after;
        }

        self.position = next;
        self.trie.arena.entry(next)
    }

    /// The entry the cursor is parked on, if it is a live entry.
    pub fn get(&self) -> Option<&Entry<V>> {
        self.trie.arena.entry(self.position)
    }

    /// Removes the entry the cursor is parked on and returns it. Returns `None` before the first
    /// entry, past the last one, or if the entry was already removed.
    pub fn remove(&mut self) -> Option<Entry<V>> {
        let leaf = self.trie.arena.leaf(self.position);
        if leaf.is_sentinel() || leaf.is_deleted() {
            return None;
        }

        self.trie.detach(self.position);
        let entry = self.trie.arena.leaf_mut(self.position).entry.take();
        trace!(size = self.trie.size, "removed entry through cursor");
        entry
    }

    fn release(&mut self, tombstone: NodeId) {
        self.trie.arena.free(tombstone);
        trace!(node = tombstone, "released tombstone");
    }
}

impl<V, D> Drop for Cursor<'_, V, D> {
    fn drop(&mut self) {
        if self.trie.arena.leaf(self.position).is_deleted() {
            self.release(self.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::Trie;

    fn trie_of(keys: &[&str]) -> Trie {
        let mut trie = Trie::new();
        trie.add_all(keys).unwrap();
        trie
    }

    #[test]
    fn test_iter_both_ends() {
        let trie = trie_of(&["b", "d", "a", "c"]);
        let mut iter = trie.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next().map(|e| e.key()), Some("a"));
        assert_eq!(iter.next_back().map(|e| e.key()), Some("d"));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back().map(|e| e.key()), Some("c"));
        assert_eq!(iter.next().map(|e| e.key()), Some("b"));
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());

        let reversed: Vec<&str> = trie.keys().rev().collect();
        assert_eq!(reversed, vec!["d", "c", "b", "a"]);
        let via_ref: Vec<&str> = (&trie).into_iter().map(|e| e.key()).collect();
        assert_eq!(via_ref, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_iter_empty() {
        let trie = Trie::<()>::new();
        assert_eq!(trie.iter().len(), 0);
        assert!(trie.iter().next().is_none());
    }

    #[test]
    fn test_cursor_walk() {
        let mut trie = trie_of(&["x", "y"]);
        let mut cursor = trie.iterate();
        assert!(cursor.get().is_none());
        assert!(cursor.has_next());
        assert_eq!(cursor.next().map(|e| e.key()), Some("x"));
        assert!(cursor.has_next());
        assert_eq!(cursor.next().map(|e| e.key()), Some("y"));
        assert!(!cursor.has_next());
        assert!(cursor.next().is_none());
        assert!(cursor.next().is_none());
        assert!(cursor.remove().is_none());
    }

    #[test]
    fn test_cursor_remove() {
        let mut trie = trie_of(&["a", "b", "c", "d"]);
        let allocated = trie.arena.len();
        {
            let mut cursor = trie.iterate();
            assert!(cursor.remove().is_none());
            cursor.next();
            cursor.next();
            assert_eq!(cursor.remove().map(|e| e.key().to_string()), Some("b".into()));
            assert!(cursor.get().is_none());
            assert!(cursor.remove().is_none());
            assert!(cursor.has_next());
            assert_eq!(cursor.next().map(|e| e.key()), Some("c"));
        }
        assert_eq!(trie.len(), 3);
        assert!(!trie.contains("b"));
        let keys: Vec<&str> = trie.keys().collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
        // The leaf of "b" and its branch node are gone.
        assert_eq!(trie.arena.len(), allocated - 2);
    }

    #[test]
    fn test_cursor_drop_releases_tombstone() {
        let mut trie = trie_of(&["a", "b"]);
        let allocated = trie.arena.len();
        {
            let mut cursor = trie.iterate();
            cursor.next();
            cursor.next();
            assert!(cursor.remove().is_some());
            assert!(!cursor.has_next());
        }
        assert_eq!(trie.arena.len(), allocated - 2);
        assert_eq!(trie.max().unwrap(), "a");
        assert_eq!(trie.successor("a"), Err(crate::error::TrieError::NotFound));
    }
}
