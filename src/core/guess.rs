//! A single submitted guess and the feedback it received

use super::{Feedback, GuessError, Status, Word};
use std::fmt;
use std::str::FromStr;

/// One entry of the guess history
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Pair a guessed word with its per-letter statuses
    ///
    /// # Errors
    /// Returns `GuessError` if the word is not 5 ASCII letters, or
    /// `GuessError::InvalidFeedbackLength` if `statuses` does not hold exactly
    /// one entry per letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{GuessError, GuessRecord, Status::*};
    ///
    /// let record = GuessRecord::new("about", &[Present, Present, Correct, Absent, Absent]);
    /// assert!(record.is_ok());
    ///
    /// let mismatched = GuessRecord::new("about", &[Present, Present, Correct]);
    /// assert_eq!(mismatched, Err(GuessError::InvalidFeedbackLength(3)));
    /// ```
    pub fn new(word: impl AsRef<str>, statuses: &[Status]) -> Result<Self, GuessError> {
        let word = Word::new(word)?;
        let feedback = Feedback::from_statuses(statuses)?;
        Ok(Self { word, feedback })
    }

    #[must_use]
    pub const fn from_parts(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Record the feedback `guess` would receive if `answer` were the secret
    #[must_use]
    pub fn scored(guess: Word, answer: &Word) -> Self {
        let feedback = Feedback::calculate(&guess, answer);
        Self {
            word: guess,
            feedback,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Iterate `(position, letter, status)` triples
    pub fn observations(&self) -> impl Iterator<Item = (usize, char, Status)> + '_ {
        self.word
            .letters()
            .zip(self.feedback.statuses().iter().copied())
            .enumerate()
            .map(|(position, (letter, status))| (position, letter, status))
    }
}

impl FromStr for GuessRecord {
    type Err = GuessError;

    /// Parse `word:feedback`, `word=feedback` or `word feedback`
    ///
    /// ```
    /// use wordle_trie::core::GuessRecord;
    ///
    /// let record: GuessRecord = "about:yyg--".parse().unwrap();
    /// assert_eq!(record.word().text(), "about");
    /// assert_eq!(record.feedback().to_string(), "YYG--");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (word, feedback) = trimmed
            .split_once([':', '='])
            .or_else(|| trimmed.split_once(char::is_whitespace))
            .ok_or_else(|| GuessError::MalformedRecord(trimmed.to_string()))?;

        Ok(Self {
            word: word.parse()?,
            feedback: feedback.parse()?,
        })
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.feedback)
    }
}
