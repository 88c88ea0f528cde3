//! The ordered digital search trie.

use std::fmt;

use tracing::{debug, trace};

use crate::arena::NodeArena;
use crate::digitizer::ascii::AsciiDigitizer;
use crate::digitizer::Digitizer;
use crate::entry::Entry;
use crate::error::{Result, TrieError};
use crate::iter::{Cursor, Iter};
use crate::node::{Node, NodeId, Role};
use crate::options::TrieOptions;
use crate::search::{Position, SearchContext, SearchResult};

/// An ordered digital search trie over string keys.
///
/// Every key is broken into digits by a [`Digitizer`] and each digit selects one child slot at
/// one level of the tree, so lookups cost time proportional to the key length rather than the
/// number of entries. Alongside the tree, every leaf is threaded onto a doubly linked list kept
/// in sorted key order, which makes [`min`](Trie::min), [`max`](Trie::max) and in-order
/// iteration trivial.
///
/// Keys have surrounding whitespace trimmed before use, and are stored trimmed.
///
/// ```rust
/// use digitrie::Trie;
///
/// let mut trie = Trie::<&str>::new();
/// trie.add_entry(("dog", "bark").into()).unwrap();
/// trie.add_entry(("cat", "meow").into()).unwrap();
/// trie.add_entry(("dove", "coo").into()).unwrap();
///
/// assert_eq!(trie.get("cat"), Some(&"meow"));
/// assert_eq!(trie.min().unwrap(), "cat");
/// assert_eq!(trie.successor("dog").unwrap(), "dove");
/// assert_eq!(trie.completions("do").unwrap(), vec!["dog", "dove"]);
///
/// let keys: Vec<&str> = trie.keys().collect();
/// assert_eq!(keys, vec!["cat", "dog", "dove"]);
/// ```
pub struct Trie<V = (), D = AsciiDigitizer> {
    pub(crate) arena: NodeArena<V>,
    pub(crate) digitizer: D,
    pub(crate) root: Option<NodeId>,
    pub(crate) head: NodeId,
    pub(crate) tail: NodeId,
    pub(crate) size: usize,
}

impl<V> Default for Trie<V, AsciiDigitizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V, AsciiDigitizer> {
    /// An empty trie over printable ASCII keys.
    pub fn new() -> Self {
        match Self::with_options(TrieOptions::new()) {
            Ok(trie) => trie,
            Err(_) => unreachable!("the ascii digitizer has a non-zero base"),
        }
    }
}

impl<V, D> Trie<V, D> {
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn digitizer(&self) -> &D {
        &self.digitizer
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.arena, self.head, self.tail, self.size)
    }

    /// A cursor over the entries in sorted order that can remove the entry it is on.
    pub fn iterate(&mut self) -> Cursor<'_, V, D> {
        Cursor::new(self)
    }

    pub fn entries(&self) -> Vec<&Entry<V>> {
        self.iter().collect()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.iter().map(Entry::key)
    }

    /// The smallest key. O(1).
    pub fn min(&self) -> Result<&str> {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        self.key_of(self.arena.leaf(self.head).next())
    }

    /// The largest key. O(1).
    pub fn max(&self) -> Result<&str> {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        self.key_of(self.arena.leaf(self.tail).previous())
    }

    /// The entry at `index` in sorted order.
    pub fn value_at(&self, index: usize) -> Result<&Entry<V>> {
        if index >= self.size {
            return Err(TrieError::BoundsOutOfRange {
                index,
                len: self.size,
            });
        }
        self.iter().nth(index).ok_or(TrieError::NotFound)
    }

    fn key_of(&self, id: Option<NodeId>) -> Result<&str> {
        id.and_then(|id| self.arena.entry(id))
            .map(Entry::key)
            .ok_or(TrieError::NotFound)
    }

    /// Unlinks a matched leaf from the overlay list and prunes the branch that led to it. The
    /// leaf itself stays allocated.
    pub(crate) fn detach(&mut self, leaf: NodeId) {
        self.arena.remove_from_list(leaf);
        self.prune(leaf);
        self.size -= 1;
    }

    fn prune(&mut self, leaf: NodeId) {
        let mut node = leaf;
        while let Some((parent, slot)) = self.arena.get(node).parent {
            if self.arena.get(node).has_children() {
                break;
            }
            self.arena.remove_child_at(parent, slot);
            if node != leaf {
                self.arena.free(node);
                trace!(node, "pruned empty node");
            }
            node = parent;
        }
    }
}

impl<V, D: Digitizer> Trie<V, D> {
    pub fn with_digitizer(digitizer: D) -> Result<Self> {
        Self::with_options(TrieOptions::new().digitizer(digitizer))
    }

    pub fn with_options(options: TrieOptions<D>) -> Result<Self> {
        let TrieOptions {
            digitizer,
            node_capacity,
        } = options;
        let base = digitizer.base();
        if base == 0 {
            return Err(TrieError::InvalidConfiguration(
                "base for digitizer must be greater than 0".to_string(),
            ));
        }

        let mut arena = NodeArena::with_capacity(node_capacity.saturating_add(2));
        let head = arena.insert(Node::new_sentinel(Role::Head));
        let tail = arena.insert(Node::new_sentinel(Role::Tail));
        arena.leaf_mut(head).next = Some(tail);
        arena.leaf_mut(tail).prev = Some(head);

        debug!(
            base,
            prefix_free = digitizer.is_prefix_free(),
            node_capacity,
            "created trie"
        );
        Ok(Self {
            arena,
            digitizer,
            root: None,
            head,
            tail,
            size: 0,
        })
    }

    /// Inserts `entry`. The key is trimmed first.
    ///
    /// Fails with [`TrieError::ValueRequired`] for a blank key, [`TrieError::DuplicateKey`] if
    /// the key is already present, [`TrieError::PrefixViolation`] if the key's digits are a
    /// prefix of a stored key's or the other way around, and with whatever the digitizer reports
    /// for keys it cannot map. The trie is unchanged on failure.
    pub fn add_entry(&mut self, mut entry: Entry<V>) -> Result<()> {
        let trimmed = entry.key().trim();
        if trimmed.is_empty() {
            return Err(TrieError::ValueRequired);
        }
        if trimmed.len() != entry.key().len() {
            let trimmed = trimmed.to_string();
            *entry.key_mut() = trimmed;
        }

        let digits = self.digitize(entry.key())?;
        if digits.is_empty() {
            return Err(TrieError::ValueRequired);
        }
        let root = self.ensure_root();

        let start = {
            let (result, ctx) = self.find(entry.key())?;
            match result {
                SearchResult::Unmatched => ctx.position(),
                SearchResult::Matched => {
                    return Err(TrieError::DuplicateKey(entry.key().to_string()))
                }
                SearchResult::Prefix | SearchResult::Extension => {
                    return Err(TrieError::PrefixViolation(entry.key().to_string()))
                }
            }
        };

        let base = self.digitizer.base();
        let last = digits.len() - 1;
        let mut node = start.node;
        for &digit in &digits[start.depth..last] {
            let child = self.arena.insert(Node::new_inner(base));
            self.arena.add_child(node, digit, child)?;
            node = child;
        }

        let key = entry.key().to_string();
        let leaf = self.arena.insert(Node::new_leaf(entry));
        self.arena.add_child(node, digits[last], leaf)?;

        let pivot = {
            let mut ctx = SearchContext::at(
                &self.arena,
                &self.digitizer,
                Position {
                    node: leaf,
                    depth: digits.len(),
                },
            );
            if ctx.move_to_predecessor(&key, SearchResult::Matched)? {
                ctx.node()
            } else {
                self.head
            }
        };
        self.arena.add_after(leaf, pivot);
        self.size += 1;

        trace!(key = %key, root, size = self.size, "inserted entry");
        Ok(())
    }

    /// Inserts every entry in order, stopping at the first failure.
    pub fn add_all_entries<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = Entry<V>>,
    {
        for entry in entries {
            self.add_entry(entry)?;
        }
        Ok(())
    }

    /// Removes the entry for `key`, reporting whether there was one.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        self.take(key).map(|entry| entry.is_some())
    }

    pub fn remove_entry(&mut self, entry: &Entry<V>) -> Result<bool> {
        self.remove(entry.key())
    }

    /// Removes the entry for `key` and hands it back.
    ///
    /// An absent key is not an error: `Ok(None)` is returned and nothing changes.
    pub fn take(&mut self, key: &str) -> Result<Option<Entry<V>>> {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        let key = key.trim();
        if key.is_empty() {
            return Err(TrieError::ValueRequired);
        }

        let leaf = match self.find(key)? {
            (SearchResult::Matched, ctx) => ctx.node(),
            _ => return Ok(None),
        };

        self.detach(leaf);
        let entry = self.arena.free(leaf).into_value();
        trace!(key, size = self.size, "removed entry");
        Ok(entry)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        let removed = self.size;
        let mut cursor = self.iterate();
        while cursor.next().is_some() {
            cursor.remove();
        }
        drop(cursor);
        debug!(removed, allocated = self.arena.len(), "cleared trie");
    }

    pub fn contains(&self, key: &str) -> bool {
        matches!(self.find(key), Ok((SearchResult::Matched, _)))
    }

    /// The entry stored for `key`.
    pub fn entry(&self, key: &str) -> Result<&Entry<V>> {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        if key.trim().is_empty() {
            return Err(TrieError::ValueRequired);
        }
        match self.find(key)? {
            (SearchResult::Matched, ctx) => ctx.entry().ok_or(TrieError::NotFound),
            _ => Err(TrieError::NotFound),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entry(key).ok().map(Entry::data)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let leaf = match self.find(key) {
            Ok((SearchResult::Matched, ctx)) => ctx.node(),
            _ => return None,
        };
        self.arena.get_mut(leaf).value_mut().map(Entry::data_mut)
    }

    /// Entries stored directly below the node spelled by `key`, in sorted order.
    ///
    /// Under a prefix-free digitizer an exact match for `key` is itself one of those leaves.
    pub fn leaves(&self, key: &str) -> Result<Vec<&Entry<V>>> {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        if key.trim().is_empty() {
            return Err(TrieError::ValueRequired);
        }

        let (result, mut ctx) = self.find(key)?;
        match result {
            SearchResult::Matched if ctx.processed_end_of_string() => ctx.ascend(),
            SearchResult::Matched | SearchResult::Prefix => {}
            SearchResult::Extension | SearchResult::Unmatched => return Err(TrieError::NotFound),
        }

        let node = self.arena.get(ctx.node());
        Ok(node
            .iter()
            .filter_map(|(_, child)| self.arena.entry(child))
            .collect())
    }

    /// The largest key strictly smaller than `key`, which need not be stored.
    pub fn predecessor(&self, key: &str) -> Result<&str> {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        let key = key.trim();
        if key.is_empty() {
            return Err(TrieError::ValueRequired);
        }

        let (result, mut ctx) = self.find(key)?;
        if ctx.move_to_predecessor(key, result)? {
            self.key_of(Some(ctx.node()))
        } else {
            Err(TrieError::NotFound)
        }
    }

    /// The smallest key strictly greater than `key`, which need not be stored.
    pub fn successor(&self, key: &str) -> Result<&str> {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        let key = key.trim();
        if key.is_empty() {
            return Err(TrieError::ValueRequired);
        }

        let (result, mut ctx) = self.find(key)?;
        let from = if result == SearchResult::Matched || ctx.move_to_predecessor(key, result)? {
            ctx.node()
        } else {
            self.head
        };
        self.key_of(self.arena.leaf(from).next())
    }

    /// Appends every stored key that starts with `prefix` to `sink`, in sorted order.
    pub fn completions_into<S>(&self, prefix: &str, sink: &mut S) -> Result<()>
    where
        S: Extend<String>,
    {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        let prefix = prefix.trim();
        let (result, mut ctx) = self.find(prefix)?;

        let mut num_digits = self.digitizer.num_digits_of(prefix);
        if self.digitizer.is_prefix_free() {
            num_digits = num_digits.saturating_sub(1);
            if ctx.processed_end_of_string() {
                ctx.ascend();
            }
        }

        if matches!(result, SearchResult::Prefix | SearchResult::Matched)
            || ctx.depth() == num_digits
        {
            ctx.entries_in_subtree(sink);
        }
        Ok(())
    }

    pub fn completions(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        self.completions_into(prefix, &mut keys)?;
        Ok(keys)
    }

    /// Appends to `sink`, in sorted order, every key below the deepest node that `prefix` can be
    /// followed to.
    pub fn longest_common_prefix_into<S>(&self, prefix: &str, sink: &mut S) -> Result<()>
    where
        S: Extend<String>,
    {
        if self.is_empty() {
            return Err(TrieError::CollectionEmpty);
        }
        let (_, mut ctx) = self.find(prefix)?;
        if ctx.processed_end_of_string() {
            ctx.ascend();
        }
        ctx.entries_in_subtree(sink);
        Ok(())
    }

    pub fn longest_common_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        self.longest_common_prefix_into(prefix, &mut keys)?;
        Ok(keys)
    }

    /// Follows `key` down the trie as far as it goes.
    ///
    /// Fails with [`TrieError::NotFound`] for a blank key. An empty trie gives
    /// [`SearchResult::Unmatched`], parked on the root or on the head sentinel if no root has
    /// been created yet.
    pub(crate) fn find(&self, key: &str) -> Result<(SearchResult, SearchContext<'_, V, D>)> {
        let key = key.trim();
        if key.is_empty() {
            return Err(TrieError::NotFound);
        }

        let start = self.root.unwrap_or(self.head);
        let mut ctx = SearchContext::new(&self.arena, &self.digitizer, start);
        if self.is_empty() {
            return Ok((SearchResult::Unmatched, ctx));
        }

        let num_digits = self.digitizer.num_digits_of(key);
        while !ctx.at_leaf() {
            if ctx.depth() == num_digits {
                return Ok((SearchResult::Prefix, ctx));
            }
            if !ctx.descend_to(key)? {
                return Ok((SearchResult::Unmatched, ctx));
            }
        }

        if ctx.depth() != num_digits {
            Ok((SearchResult::Extension, ctx))
        } else {
            Ok((SearchResult::Matched, ctx))
        }
    }

    /// The full digit sequence of `key`, checked against the base.
    fn digitize(&self, key: &str) -> Result<Vec<usize>> {
        let base = self.digitizer.base();
        (0..self.digitizer.num_digits_of(key))
            .map(|position| {
                let digit = self.digitizer.digit_of(key, position)?;
                if digit >= base {
                    return Err(TrieError::BoundsOutOfRange {
                        index: digit,
                        len: base,
                    });
                }
                Ok(digit)
            })
            .collect()
    }

    fn ensure_root(&mut self) -> NodeId {
        match self.root {
            Some(root) => root,
            None => {
                let root = self.arena.insert(Node::new_inner(self.digitizer.base()));
                self.root = Some(root);
                root
            }
        }
    }
}

impl<V: Default, D: Digitizer> Trie<V, D> {
    /// Inserts `key` with a default payload. Blank keys are skipped.
    pub fn add(&mut self, key: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Ok(());
        }
        self.add_entry(Entry::from_key(key))
    }

    /// Inserts every key in order, skipping blank ones and stopping at the first failure.
    pub fn add_all<I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref())?;
        }
        Ok(())
    }
}

impl<'a, V, D> IntoIterator for &'a Trie<V, D> {
    type Item = &'a Entry<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug, D> fmt::Display for Trie<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (entry.key(), entry.data())))
            .finish()
    }
}

impl<V: fmt::Debug, D: fmt::Debug> fmt::Debug for Trie<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("digitizer", &self.digitizer)
            .field("len", &self.size)
            .field("entries", &self.entries())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::digitizer::alphabet::AlphabetDigitizer;
    use crate::digitizer::Digitizer;
    use crate::entry::Entry;
    use crate::error::{Result, TrieError};
    use crate::options::TrieOptions;
    use crate::trie::Trie;

    fn trie_of(keys: &[&str]) -> Trie {
        let mut trie = Trie::new();
        trie.add_all(keys).unwrap();
        trie
    }

    fn keys(trie: &Trie) -> Vec<&str> {
        trie.keys().collect()
    }

    #[test]
    fn test_sorted_entries() {
        let trie = trie_of(&["the", "quick", "brown", "fox"]);
        assert_eq!(keys(&trie), vec!["brown", "fox", "quick", "the"]);
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_remove() {
        let mut trie = trie_of(&["jumped", "over", "the", "lazy", "dog"]);
        assert!(trie.remove("lazy").unwrap());
        assert!(trie.remove("the").unwrap());
        assert_eq!(keys(&trie), vec!["dog", "jumped", "over"]);
        assert!(!trie.remove("fox").unwrap());
        assert!(!trie.remove("lazy").unwrap());
        assert_eq!(trie.len(), 3);
        assert!(!trie.contains("lazy"));
        assert!(trie.contains("over"));
    }

    #[test]
    fn test_completions() {
        let trie = trie_of(&["acb", "dabc", "daca", "da", "ab"]);
        assert_eq!(trie.completions("da").unwrap(), vec!["da", "dabc", "daca"]);
        assert_eq!(trie.completions("a").unwrap(), vec!["ab", "acb"]);
        assert_eq!(trie.completions("dab").unwrap(), vec!["dabc"]);
        assert_eq!(trie.completions("daca").unwrap(), vec!["daca"]);
        assert!(trie.completions("x").unwrap().is_empty());
        assert!(trie.completions("dax").unwrap().is_empty());
        assert_eq!(trie.completions(" "), Err(TrieError::NotFound));

        let mut sink = vec!["seed".to_string()];
        trie.completions_into("ac", &mut sink).unwrap();
        assert_eq!(sink, vec!["seed", "acb"]);
    }

    #[test]
    fn test_longest_common_prefix() {
        let trie = trie_of(&["acb", "dadc", "dada", "da", "ab"]);
        assert_eq!(trie.longest_common_prefix("a").unwrap(), vec!["ab", "acb"]);
        assert_eq!(
            trie.longest_common_prefix("dadda").unwrap(),
            vec!["dada", "dadc"]
        );
        assert_eq!(
            trie.longest_common_prefix("da").unwrap(),
            vec!["da", "dada", "dadc"]
        );
        assert_eq!(
            trie.longest_common_prefix("zebra").unwrap(),
            vec!["ab", "acb", "da", "dada", "dadc"]
        );
    }

    #[test]
    fn test_predecessor_successor() {
        let trie = trie_of(&["bac", "dab", "dabb", "dac", "daca", "dabba", "ab"]);
        assert_eq!(trie.predecessor("dabba").unwrap(), "dabb");
        assert_eq!(trie.successor("dabba").unwrap(), "dac");
        assert_eq!(trie.predecessor("bac").unwrap(), "ab");
        assert_eq!(trie.successor("bac").unwrap(), "dab");

        // Absent keys.
        assert_eq!(trie.predecessor("c").unwrap(), "bac");
        assert_eq!(trie.successor("c").unwrap(), "dab");
        assert_eq!(trie.successor("aa").unwrap(), "ab");
        assert_eq!(trie.predecessor("zz").unwrap(), "daca");

        // Boundaries.
        assert_eq!(trie.predecessor("ab"), Err(TrieError::NotFound));
        assert_eq!(trie.successor("daca"), Err(TrieError::NotFound));
        assert_eq!(trie.predecessor("aa"), Err(TrieError::NotFound));
        assert_eq!(trie.successor("zz"), Err(TrieError::NotFound));
        assert_eq!(trie.predecessor(""), Err(TrieError::ValueRequired));
    }

    #[test]
    fn test_min_max() {
        let mut trie = Trie::<()>::new();
        assert_eq!(trie.min(), Err(TrieError::CollectionEmpty));
        assert_eq!(trie.max(), Err(TrieError::CollectionEmpty));
        trie.add_all(["cba", "ab", "bce", "abcd"]).unwrap();
        assert_eq!(trie.min().unwrap(), "ab");
        assert_eq!(trie.max().unwrap(), "cba");
        trie.remove("ab").unwrap();
        trie.remove("cba").unwrap();
        assert_eq!(trie.min().unwrap(), "abcd");
        assert_eq!(trie.max().unwrap(), "bce");
    }

    #[test]
    fn test_value_at() {
        let trie = trie_of(&["Luffy", "Zoro", "Tony Chopper", "Sanji", "Frankie"]);
        assert_eq!(trie.value_at(2).unwrap().key(), "Sanji");
        assert_eq!(trie.value_at(0).unwrap().key(), "Frankie");
        assert_eq!(trie.value_at(4).unwrap().key(), "Zoro");
        assert_eq!(
            trie.value_at(5),
            Err(TrieError::BoundsOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_entries_with_payloads() -> Result<()> {
        let mut trie = Trie::<&str>::new();
        trie.add_entry(Entry::new("dog", "bark"))?;
        trie.add_entry(Entry::new("  cat ", "meow"))?;
        assert_eq!(trie.entry("dog")?.data(), &"bark");
        assert_eq!(trie.entry("cat")?.key(), "cat");
        assert_eq!(trie.get(" cat"), Some(&"meow"));
        assert_eq!(trie.entry("cow"), Err(TrieError::NotFound));
        assert_eq!(trie.entry(" "), Err(TrieError::ValueRequired));

        *trie.get_mut("dog").unwrap() = "woof";
        assert_eq!(trie.get("dog"), Some(&"woof"));
        assert!(trie.get_mut("cow").is_none());

        let taken = trie.take("dog")?.unwrap();
        assert_eq!(taken.into_parts(), ("dog".to_string(), "woof"));
        assert_eq!(trie.take("dog")?, None);
        Ok(())
    }

    #[test]
    fn test_clear() {
        let mut trie = Trie::<&str>::new();
        trie.add_entry(Entry::new("dog", "bark")).unwrap();
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.entry("dog"), Err(TrieError::CollectionEmpty));
        assert!(trie.iter().next().is_none());

        trie.add_entry(Entry::new("dog", "bark")).unwrap();
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.min().unwrap(), "dog");
    }

    #[test]
    fn test_duplicate_and_blank_keys() {
        let mut trie = trie_of(&["ab"]);
        assert_eq!(
            trie.add_entry(Entry::from_key("ab")),
            Err(TrieError::DuplicateKey("ab".to_string()))
        );
        assert_eq!(
            trie.add_entry(Entry::from_key("  ")),
            Err(TrieError::ValueRequired)
        );
        trie.add("   ").unwrap();
        trie.add_all(["", "cd", " "]).unwrap();
        assert_eq!(keys(&trie), vec!["ab", "cd"]);
        assert_eq!(trie.remove(""), Err(TrieError::ValueRequired));
    }

    #[test]
    fn test_prefix_free_digitizer_allows_prefixes() {
        let trie = trie_of(&["ab", "abc", "a"]);
        assert_eq!(keys(&trie), vec!["a", "ab", "abc"]);
    }

    #[test]
    fn test_prefix_violation() {
        let mut trie =
            Trie::<(), _>::with_digitizer(AlphabetDigitizer::unterminated("abcd")).unwrap();
        trie.add("ab").unwrap();
        assert_eq!(
            trie.add("abc"),
            Err(TrieError::PrefixViolation("abc".to_string()))
        );
        assert_eq!(
            trie.add("a"),
            Err(TrieError::PrefixViolation("a".to_string()))
        );
        assert_eq!(trie.len(), 1);
        trie.add_all(["ba", "bb", "ac"]).unwrap();
        assert_eq!(keys_of(&trie), vec!["ab", "ac", "ba", "bb"]);
        assert_eq!(trie.predecessor("b").unwrap(), "ac");
        assert_eq!(trie.successor("b").unwrap(), "ba");
        assert_eq!(trie.completions("b").unwrap(), vec!["ba", "bb"]);
    }

    fn keys_of<D: Digitizer>(trie: &Trie<(), D>) -> Vec<&str> {
        trie.keys().collect()
    }

    #[test]
    fn test_terminated_alphabet_order() {
        // Custom order: consonants first.
        let mut trie =
            Trie::<(), _>::with_digitizer(AlphabetDigitizer::terminated("bcda")).unwrap();
        trie.add_all(["ab", "ba", "a", "db"]).unwrap();
        assert_eq!(keys_of(&trie), vec!["ba", "db", "a", "ab"]);
    }

    #[test]
    fn test_unsupported_characters() {
        let mut trie = trie_of(&["abc"]);
        assert!(matches!(
            trie.add("caf\u{e9}"),
            Err(TrieError::UnsupportedCharacter { position: 3, .. })
        ));
        assert!(!trie.contains("caf\u{e9}"));
        assert_eq!(trie.len(), 1);

        let long = "a".repeat(120);
        assert!(matches!(
            trie.add(&long),
            Err(TrieError::PositionOutOfRange { base: 96, .. })
        ));
        assert_eq!(keys(&trie), vec!["abc"]);

        // Byte positions up to the base are digits; the end marker follows unchecked.
        let longest = "b".repeat(97);
        trie.add(&longest).unwrap();
        assert!(trie.contains(&longest));
        assert_eq!(
            trie.add(&"c".repeat(98)),
            Err(TrieError::PositionOutOfRange {
                position: 97,
                base: 96
            })
        );
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_empty_trie_errors() {
        let mut trie = Trie::<()>::new();
        assert_eq!(trie.remove("a"), Err(TrieError::CollectionEmpty));
        assert_eq!(trie.predecessor("a"), Err(TrieError::CollectionEmpty));
        assert_eq!(trie.successor("a"), Err(TrieError::CollectionEmpty));
        assert_eq!(trie.completions("a"), Err(TrieError::CollectionEmpty));
        assert_eq!(trie.leaves("a"), Err(TrieError::CollectionEmpty));
        assert!(!trie.contains("a"));
        assert!(trie.get("a").is_none());
    }

    #[test]
    fn test_invalid_configuration() {
        let result = Trie::<(), _>::with_digitizer(AlphabetDigitizer::unterminated(""));
        assert!(matches!(result, Err(TrieError::InvalidConfiguration(_))));
        let options = TrieOptions::new()
            .digitizer(AlphabetDigitizer::lowercase())
            .node_capacity(0);
        assert!(Trie::<(), _>::with_options(options).is_ok());
    }

    #[test]
    fn test_leaves() {
        let trie = trie_of(&["acb", "dabc", "daca", "da", "ab"]);
        let leaves: Vec<&str> = trie.leaves("da").unwrap().iter().map(|e| e.key()).collect();
        assert_eq!(leaves, vec!["da"]);
        assert!(trie.leaves("dabc").unwrap().iter().any(|e| e.key() == "dabc"));
        assert_eq!(trie.leaves("dab"), Err(TrieError::NotFound));

        let mut trie =
            Trie::<(), _>::with_digitizer(AlphabetDigitizer::unterminated("abc")).unwrap();
        trie.add_all(["aa", "ab", "acb", "ba"]).unwrap();
        let leaves: Vec<&str> = trie.leaves("a").unwrap().iter().map(|e| e.key()).collect();
        assert_eq!(leaves, vec!["aa", "ab"]);
    }

    #[test]
    fn test_display() {
        let mut trie = Trie::<u32>::new();
        assert_eq!(trie.to_string(), "{}");
        trie.add_all_entries([Entry::new("b", 2), Entry::new("a", 1)]).unwrap();
        assert_eq!(trie.to_string(), r#"{"a": 1, "b": 2}"#);
        assert!(format!("{trie:?}").starts_with("Trie { digitizer: AsciiDigitizer, len: 2"));
    }

    #[test]
    fn test_pruning_releases_nodes() {
        let mut trie = trie_of(&["abc"]);
        trie.add("abd").unwrap();
        // head, tail, root, a, ab, abc, abd, two leaves.
        assert_eq!(trie.arena.len(), 9);
        trie.remove("abd").unwrap();
        assert_eq!(trie.arena.len(), 7);
        trie.remove("abc").unwrap();
        assert_eq!(trie.arena.len(), 3);
        assert!(trie.is_empty());
        trie.add("abd").unwrap();
        assert_eq!(keys(&trie), vec!["abd"]);
    }
}
