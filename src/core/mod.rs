//! Core domain types for Wordle
//!
//! Guessed words, per-letter feedback and the guess records that make up a
//! game's history. These types know nothing about the dictionary.

mod feedback;
mod guess;
mod word;

pub use feedback::{Feedback, Status};
pub use guess::GuessRecord;
pub use word::Word;

use crate::WORD_LENGTH;
use thiserror::Error;

/// Errors from building guesses and feedback out of user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("word must be exactly {} letters, got {0}", WORD_LENGTH)]
    InvalidLength(usize),

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,

    /// Feedback does not carry exactly one status per guessed letter.
    #[error("feedback must have exactly {} statuses, got {0}", WORD_LENGTH)]
    InvalidFeedbackLength(usize),

    #[error("unrecognized feedback symbol {0:?} (use G/Y/- or 🟩🟨⬜)")]
    InvalidFeedbackSymbol(char),

    #[error("malformed guess {0:?}, expected <word>:<feedback>")]
    MalformedRecord(String),
}
