use crate::digitizer::{Digitizer, END_OF_KEY};
use crate::error::{Result, TrieError};

const FIRST_PRINTABLE: u8 = b' ';
const LAST_PRINTABLE: u8 = b'~';

/// Digitizer over printable ASCII (`' '..='~'`), one digit per byte.
///
/// Printable characters map to `1..=95` in code point order and digit 0 is reserved for the end
/// of the key, giving a base of 96. Because digit 0 only ever appears past the end of a key, a
/// key and any continuation of it always branch apart, so the alphabet is prefix-free and the
/// resulting order is plain byte order.
///
/// ```rust
/// use digitrie::digitizer::Digitizer;
/// use digitrie::digitizer::ascii::AsciiDigitizer;
///
/// let d = AsciiDigitizer::new();
/// assert_eq!(d.base(), 96);
/// assert_eq!(d.num_digits_of("ab"), 3);
/// assert_eq!(d.digit_of("ab", 0).unwrap(), 66);
/// assert_eq!(d.digit_of("ab", 2).unwrap(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsciiDigitizer;

impl AsciiDigitizer {
    pub fn new() -> Self {
        Self
    }
}

impl Digitizer for AsciiDigitizer {
    #[inline]
    fn base(&self) -> usize {
        (LAST_PRINTABLE - FIRST_PRINTABLE) as usize + 2
    }

    #[inline]
    fn is_prefix_free(&self) -> bool {
        true
    }

    #[inline]
    fn num_digits_of(&self, key: &str) -> usize {
        key.len() + 1
    }

    fn digit_of(&self, key: &str, position: usize) -> Result<usize> {
        let bytes = key.as_bytes();
        if position >= bytes.len() {
            return Ok(END_OF_KEY);
        }

        if position > self.base() {
            return Err(TrieError::PositionOutOfRange {
                position,
                base: self.base(),
            });
        }

        match bytes[position] {
            b @ FIRST_PRINTABLE..=LAST_PRINTABLE => Ok((b - FIRST_PRINTABLE) as usize + 1),
            _ => Err(TrieError::UnsupportedCharacter {
                key: key.to_string(),
                position,
                character: char_at_byte(key, position),
            }),
        }
    }

    fn format_digit(&self, key: &str, position: usize) -> Result<String> {
        if self.digit_of(key, position)? == END_OF_KEY {
            return Ok("#".to_string());
        }
        Ok((key.as_bytes()[position] as char).to_string())
    }
}

// The character whose UTF-8 encoding covers byte `position`.
fn char_at_byte(key: &str, position: usize) -> char {
    key.char_indices()
        .take_while(|(i, _)| *i <= position)
        .last()
        .map(|(_, c)| c)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
