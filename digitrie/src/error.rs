//! Errors produced by trie operations and digitizers.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Every failure is a synchronous outcome of the call that triggered it. Nothing is retried
/// internally, and a failed insert or remove leaves the trie exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// A key or entry required by the operation is absent.
    #[error("entry not found")]
    NotFound,

    /// A positional or navigational query was made against an empty trie.
    #[error("collection is empty")]
    CollectionEmpty,

    /// A blank key was supplied where a non-blank one is required.
    #[error("value is required")]
    ValueRequired,

    /// An index fell outside `[0, len)`.
    #[error("index out of bounds: len = {len}, requested index = {index}")]
    BoundsOutOfRange { index: usize, len: usize },

    /// The trie could not be constructed with the supplied options.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Inserting the key would make one stored key a digit-prefix of another.
    #[error("entry violates prefix-free requirement: {0}")]
    PrefixViolation(String),

    /// The key is already stored.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A child slot that was expected to be free is already taken.
    #[error("child exists at index {index}")]
    SlotOccupied { index: usize },

    /// The digitizer has no digit for a character of the key.
    #[error(
        "character for key is unsupported: key = {key}, position = {position}, character = {character:?}"
    )]
    UnsupportedCharacter {
        key: String,
        position: usize,
        character: char,
    },

    /// A digit was requested at a position greater than the alphabet size.
    #[error("requested position {position} is greater than the supported alphabet size {base}")]
    PositionOutOfRange { position: usize, base: usize },
}

impl TrieError {
    /// True for outcomes a caller is expected to probe for and handle, false for errors that
    /// indicate a bug or misconfiguration on the caller's side.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrieError::NotFound | TrieError::CollectionEmpty | TrieError::DuplicateKey(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::TrieError;

    #[test]
    fn test_recoverable_classification() {
        assert!(TrieError::NotFound.is_recoverable());
        assert!(TrieError::CollectionEmpty.is_recoverable());
        assert!(TrieError::DuplicateKey("ab".into()).is_recoverable());
        assert!(!TrieError::BoundsOutOfRange { index: 3, len: 2 }.is_recoverable());
        assert!(!TrieError::InvalidConfiguration("base".into()).is_recoverable());
        assert!(!TrieError::PrefixViolation("abc".into()).is_recoverable());
    }

    #[test]
    fn test_messages() {
        assert_eq!(TrieError::CollectionEmpty.to_string(), "collection is empty");
        assert_eq!(
            TrieError::BoundsOutOfRange { index: 5, len: 2 }.to_string(),
            "index out of bounds: len = 2, requested index = 5"
        );
        assert_eq!(
            TrieError::UnsupportedCharacter {
                key: "caf\u{e9}".into(),
                position: 3,
                character: '\u{e9}',
            }
            .to_string(),
            "character for key is unsupported: key = caf\u{e9}, position = 3, character = '\u{e9}'"
        );
    }
}
