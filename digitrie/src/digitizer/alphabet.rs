use std::collections::HashMap;

use crate::digitizer::{Digitizer, END_OF_KEY};
use crate::error::{Result, TrieError};

/// Digitizer over a caller-supplied, ordered alphabet of characters.
///
/// The position of a character in the alphabet decides its order. A *terminated* alphabet
/// reserves digit 0 for the end of a key, maps characters to `1..=n` and is prefix-free. An
/// *unterminated* alphabet maps characters to `0..n`, has no end marker and is not prefix-free,
/// so a trie built over it refuses keys that are digit-prefixes of one another.
///
/// Positions are counted in `char`s rather than bytes.
#[derive(Clone, Debug)]
pub struct AlphabetDigitizer {
    alphabet: Vec<char>,
    digits: HashMap<char, usize>,
    terminated: bool,
}

impl AlphabetDigitizer {
    /// An alphabet with an end of key marker; prefix-free.
    pub fn terminated(alphabet: &str) -> Self {
        Self::build(alphabet, true)
    }

    /// An alphabet without an end of key marker; not prefix-free.
    pub fn unterminated(alphabet: &str) -> Self {
        Self::build(alphabet, false)
    }

    /// Lowercase latin letters, terminated.
    pub fn lowercase() -> Self {
        Self::terminated("abcdefghijklmnopqrstuvwxyz")
    }

    fn build(alphabet: &str, terminated: bool) -> Self {
        let offset = usize::from(terminated);
        let mut chars = Vec::new();
        let mut digits = HashMap::new();
        for c in alphabet.chars() {
            // Repeated characters keep their first position.
            if digits.contains_key(&c) {
                continue;
            }
            digits.insert(c, chars.len() + offset);
            chars.push(c);
        }
        Self {
            alphabet: chars,
            digits,
            terminated,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Digitizer for AlphabetDigitizer {
    fn base(&self) -> usize {
        self.alphabet.len() + usize::from(self.terminated)
    }

    fn is_prefix_free(&self) -> bool {
        self.terminated
    }

    fn num_digits_of(&self, key: &str) -> usize {
        key.chars().count() + usize::from(self.terminated)
    }

    fn digit_of(&self, key: &str, position: usize) -> Result<usize> {
        let Some(c) = key.chars().nth(position) else {
            return Ok(END_OF_KEY);
        };

        if position > self.base() {
            return Err(TrieError::PositionOutOfRange {
                position,
                base: self.base(),
            });
        }

        self.digits
            .get(&c)
            .copied()
            .ok_or_else(|| TrieError::UnsupportedCharacter {
                key: key.to_string(),
                position,
                character: c,
            })
    }

    fn format_digit(&self, key: &str, position: usize) -> Result<String> {
        let digit = self.digit_of(key, position)?;
        match key.chars().nth(position) {
            Some(c) => Ok(c.to_string()),
            None if digit == END_OF_KEY => Ok("#".to_string()),
            None => unreachable!("digit past the end of a key is always the end marker"),
        }
    }
}
