//! An ordered digital search trie over string keys.
//!
//! Keys are split into digits by a pluggable [`Digitizer`]; each digit selects one child slot
//! at one level of the tree. Every leaf is also threaded onto a doubly linked list kept in
//! sorted key order, so the structure answers prefix queries ([`Trie::completions`],
//! [`Trie::longest_common_prefix`]) and order queries ([`Trie::min`], [`Trie::max`],
//! [`Trie::predecessor`], [`Trie::successor`], [`Trie::value_at`]) alike.
//!
//! ```rust
//! use digitrie::Trie;
//!
//! let mut trie = Trie::<()>::new();
//! trie.add_all(["bac", "dab", "dabb", "dac", "daca", "dabba", "ab"]).unwrap();
//!
//! assert_eq!(trie.predecessor("dabba").unwrap(), "dabb");
//! assert_eq!(trie.successor("dabba").unwrap(), "dac");
//! assert_eq!(trie.completions("dab").unwrap(), vec!["dab", "dabb", "dabba"]);
//! ```

mod arena;
pub mod digitizer;
mod entry;
pub mod error;
pub mod iter;
mod node;
mod options;
mod search;
mod slots;
pub mod stats;
mod trie;

pub use digitizer::alphabet::AlphabetDigitizer;
pub use digitizer::ascii::AsciiDigitizer;
pub use digitizer::Digitizer;
pub use entry::Entry;
pub use error::{Result, TrieError};
pub use iter::{Cursor, Iter};
pub use options::TrieOptions;
pub use stats::{TrieStats, TrieStatsTrait};
pub use trie::Trie;
