//! Constraint sets derived from a guess history
//!
//! Rebuilt from scratch on every query; nothing here outlives a call.

use crate::WORD_LENGTH;
use crate::core::{GuessRecord, Status};
use rustc_hash::FxHashSet;

/// Letter constraints accumulated over every guess in a history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    excluded: FxHashSet<char>,
    required: FxHashSet<char>,
    positions: [Vec<(char, Status)>; WORD_LENGTH],
    word_length: Option<usize>,
}

impl Constraints {
    /// Derive constraints with a single pass over `history`
    ///
    /// - letters reported `Absent` anywhere are excluded
    /// - letters reported `Present` or `Correct` anywhere are required
    /// - every `(letter, status)` is remembered at its position
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::GuessRecord;
    /// use wordle_trie::solver::Constraints;
    ///
    /// let history: Vec<GuessRecord> = vec!["about:YYG--".parse().unwrap()];
    /// let constraints = Constraints::from_history(&history);
    ///
    /// assert!(constraints.is_required('a'));
    /// assert!(constraints.is_excluded('t'));
    /// assert!(!constraints.allows(0, 'a'));
    /// assert!(constraints.allows(2, 'o'));
    /// ```
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut constraints = Self::default();

        for record in history {
            constraints.word_length = Some(WORD_LENGTH);
            for (position, letter, status) in record.observations() {
                if status.is_positive() {
                    constraints.required.insert(letter);
                } else {
                    constraints.excluded.insert(letter);
                }
                constraints.positions[position].push((letter, status));
            }
        }

        constraints
    }

    #[must_use]
    pub fn is_excluded(&self, letter: char) -> bool {
        self.excluded.contains(&letter)
    }

    #[must_use]
    pub fn is_required(&self, letter: char) -> bool {
        self.required.contains(&letter)
    }

    #[must_use]
    pub const fn excluded_letters(&self) -> &FxHashSet<char> {
        &self.excluded
    }

    #[must_use]
    pub const fn required_letters(&self) -> &FxHashSet<char> {
        &self.required
    }

    /// Everything observed at `position` across the history
    #[must_use]
    pub fn position_history(&self, position: usize) -> &[(char, Status)] {
        self.positions.get(position).map_or(&[][..], Vec::as_slice)
    }

    /// Whether `letter` may appear at `position`
    ///
    /// A green at the position admits only its letter. Otherwise a letter is
    /// rejected where it was reported yellow. Excluded letters are rejected
    /// everywhere, unless the same letter is also required (a repeated guess
    /// letter scored gray beside a green or yellow copy); such a letter is
    /// only rejected at the positions where it was reported gray.
    ///
    /// Once a guess is recorded nothing past the guess length is admitted.
    #[must_use]
    pub fn allows(&self, position: usize, letter: char) -> bool {
        if self.word_length.is_some_and(|length| position >= length) {
            return false;
        }

        let observed = self.position_history(position);

        let mut greens = observed
            .iter()
            .filter(|&&(_, status)| status == Status::Correct)
            .peekable();
        if greens.peek().is_some() {
            return greens.all(|&(green, _)| green == letter);
        }

        if self.is_excluded(letter) {
            if !self.is_required(letter) {
                return false;
            }
            if observed.contains(&(letter, Status::Absent)) {
                return false;
            }
        }

        !observed.contains(&(letter, Status::Present))
    }

    /// Whether a whole word satisfies the non-positional constraints
    ///
    /// `letters` is the word's path through the index (lower-cased).
    #[must_use]
    pub fn admits(&self, letters: &[char]) -> bool {
        if let Some(length) = self.word_length
            && letters.len() != length
        {
            return false;
        }
        self.required.iter().all(|required| letters.contains(required))
    }
}
