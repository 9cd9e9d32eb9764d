//! Per-letter feedback for a guess
//!
//! Each letter of a guess is scored as one of three statuses:
//! - `Correct` (green): letter is at this position in the answer
//! - `Present` (yellow): letter is in the answer, but elsewhere
//! - `Absent` (gray): letter is not in the answer (or all its copies are accounted for)

use super::{GuessError, Word};
use crate::WORD_LENGTH;
use std::fmt;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Status {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/'X'/'x'/'B'/'b'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'X' | 'x' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether the letter is known to be somewhere in the answer
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

/// Feedback for a whole guess: one status per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Status; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Status::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [Status; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Build feedback from a slice of statuses
    ///
    /// # Errors
    /// Returns `GuessError::InvalidFeedbackLength` unless the slice holds exactly
    /// one status per letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Feedback, GuessError, Status};
    ///
    /// let ok = Feedback::from_statuses(&[Status::Absent; 5]);
    /// assert!(ok.is_ok());
    ///
    /// let short = Feedback::from_statuses(&[Status::Absent; 4]);
    /// assert_eq!(short, Err(GuessError::InvalidFeedbackLength(4)));
    /// ```
    pub fn from_statuses(statuses: &[Status]) -> Result<Self, GuessError> {
        let statuses: [Status; WORD_LENGTH] = statuses
            .try_into()
            .map_err(|_| GuessError::InvalidFeedbackLength(statuses.len()))?;
        Ok(Self::new(statuses))
    }

    /// Get the individual statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[Status; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// Follows the game's duplicate-letter rules: greens are assigned first and
    /// consume their letter, then yellows are handed out left to right while
    /// unmatched copies of the letter remain in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_bytes = guess.bytes();
        let answer_bytes = answer.bytes();

        let mut result = [Status::Absent; WORD_LENGTH];
        let mut answer_remaining = [0u8; 26];

        // Index needed to compare guess[i] with answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == answer_bytes[i] {
                result[i] = Status::Correct;
            } else {
                answer_remaining[usize::from(answer_bytes[i] - b'a')] += 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Status::Correct {
                continue;
            }
            let slot = &mut answer_remaining[usize::from(guess_bytes[i] - b'a')];
            if *slot > 0 {
                result[i] = Status::Present;
                *slot -= 1;
            }
        }

        Self(result)
    }

    /// Convert feedback to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = GuessError;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let statuses = s
            .trim()
            .chars()
            .map(|c| Status::from_char(c).ok_or(GuessError::InvalidFeedbackSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_statuses(&statuses)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let c = match status {
                Status::Correct => 'G',
                Status::Present => 'Y',
                Status::Absent => '-',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
