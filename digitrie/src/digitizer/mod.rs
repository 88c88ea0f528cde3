use crate::error::Result;

pub mod alphabet;
pub mod ascii;

/// Digit reserved by terminated alphabets to mark the end of a key.
pub const END_OF_KEY: usize = 0;

/// Converts a key into the sequence of digits that selects a branch at every level of the trie.
///
/// Digit `d` at position `p` selects child slot `d` of the node at depth `p`, so a digitizer
/// must return digits in `[0, base())`. The order of the digits is the order in which the trie
/// visits its entries.
pub trait Digitizer {
    /// Size of the alphabet, including the end of key digit when the alphabet has one.
    fn base(&self) -> usize;

    /// True if no key's digit sequence can be a prefix of another key's digit sequence.
    ///
    /// When this is false the trie itself rejects inserts that would break the guarantee.
    fn is_prefix_free(&self) -> bool;

    /// Number of digits in `key`, including the end of key digit if the alphabet has one.
    fn num_digits_of(&self, key: &str) -> usize;

    /// Digit of `key` at `position`. Positions at or beyond the end of the key yield
    /// [`END_OF_KEY`].
    fn digit_of(&self, key: &str, position: usize) -> Result<usize>;

    /// Printable form of the digit of `key` at `position`; `#` stands for the end of key.
    fn format_digit(&self, key: &str, position: usize) -> Result<String>;
}

impl<D: Digitizer + ?Sized> Digitizer for &D {
    fn base(&self) -> usize {
        (**self).base()
    }

    fn is_prefix_free(&self) -> bool {
        (**self).is_prefix_free()
    }

    fn num_digits_of(&self, key: &str) -> usize {
        (**self).num_digits_of(key)
    }

    fn digit_of(&self, key: &str, position: usize) -> Result<usize> {
        (**self).digit_of(key, position)
    }

    fn format_digit(&self, key: &str, position: usize) -> Result<String> {
        (**self).format_digit(key, position)
    }
}

impl<D: Digitizer + ?Sized> Digitizer for Box<D> {
    fn base(&self) -> usize {
        (**self).base()
    }

    fn is_prefix_free(&self) -> bool {
        (**self).is_prefix_free()
    }

    fn num_digits_of(&self, key: &str) -> usize {
        (**self).num_digits_of(key)
    }

    fn digit_of(&self, key: &str, position: usize) -> Result<usize> {
        (**self).digit_of(key, position)
    }

    fn format_digit(&self, key: &str, position: usize) -> Result<String> {
        (**self).format_digit(key, position)
    }
}
