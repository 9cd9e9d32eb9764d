//! Guessed word representation
//!
//! A Word is a validated 5-letter lowercase ASCII guess.

use super::GuessError;
use crate::WORD_LENGTH;
use std::fmt;

/// A 5-letter guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    bytes: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lower-cased first.
    ///
    /// # Errors
    /// Returns `GuessError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, GuessError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(GuessError::NonAscii);
        }

        let bytes: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| GuessError::InvalidLength(text.len()))?;

        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(GuessError::InvalidCharacters);
        }

        Ok(Self { text, bytes })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.bytes
    }

    /// Iterate over the letters in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.bytes.iter().map(|&b| char::from(b))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
