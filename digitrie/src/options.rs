use crate::digitizer::ascii::AsciiDigitizer;
use crate::digitizer::Digitizer;

const DEFAULT_NODE_CAPACITY: usize = 64;

/// Construction options for a [`Trie`](crate::Trie).
///
/// ```rust
/// use digitrie::{AlphabetDigitizer, Trie, TrieOptions};
///
/// let options = TrieOptions::new()
///     .digitizer(AlphabetDigitizer::lowercase())
///     .node_capacity(1024);
/// let mut trie = Trie::<u32, _>::with_options(options).unwrap();
/// trie.add_entry(("apple", 3).into()).unwrap();
/// assert_eq!(trie.get("apple"), Some(&3));
/// ```
#[derive(Clone, Debug)]
pub struct TrieOptions<D = AsciiDigitizer> {
    pub(crate) digitizer: D,
    pub(crate) node_capacity: usize,
}

impl Default for TrieOptions<AsciiDigitizer> {
    fn default() -> Self {
        Self {
            digitizer: AsciiDigitizer::new(),
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }
}

impl TrieOptions<AsciiDigitizer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> TrieOptions<D> {
    /// Replaces the digit mapping strategy. A digitizer with a base of 0 makes construction fail.
    pub fn digitizer<E: Digitizer>(self, digitizer: E) -> TrieOptions<E> {
        TrieOptions {
            digitizer,
            node_capacity: self.node_capacity,
        }
    }

    /// Number of nodes to reserve arena space for up front.
    pub fn node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }
}
