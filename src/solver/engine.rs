//! Candidate filtering over the trie index

use super::Constraints;
use crate::WORD_LENGTH;
use crate::core::GuessRecord;
use crate::trie::{TerminalEntry, TrieIndex};

/// A surviving candidate with its usage weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    pub word: &'a str,
    pub frequency: Option<u64>,
}

impl<'a> From<&'a TerminalEntry> for Suggestion<'a> {
    fn from(entry: &'a TerminalEntry) -> Self {
        Self {
            word: entry.word(),
            frequency: entry.frequency(),
        }
    }
}

/// Candidate filter
///
/// Holds no state besides the index: every query replays the full history it
/// is given.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    index: &'a TrieIndex,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(index: &'a TrieIndex) -> Self {
        Self { index }
    }

    /// Words consistent with `history`, most frequent first
    ///
    /// An empty history returns the whole dictionary. An empty result means
    /// the feedback admits no dictionary word.
    #[must_use]
    pub fn suggest(&self, history: &[GuessRecord]) -> Vec<&'a str> {
        self.suggest_ranked(history)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Like [`Solver::suggest`], keeping each word's frequency
    ///
    /// Subtrees whose next letter is ruled out at its position are skipped
    /// entirely; words reached this way are then checked for every required
    /// letter. Words without a frequency rank after all words with one.
    #[must_use]
    pub fn suggest_ranked(&self, history: &[GuessRecord]) -> Vec<Suggestion<'a>> {
        let constraints = Constraints::from_history(history);
        log::debug!(
            "Filtering with {} guesses: required {:?}, excluded {:?}",
            history.len(),
            constraints.required_letters(),
            constraints.excluded_letters()
        );

        let mut path: Vec<char> = Vec::with_capacity(WORD_LENGTH);
        let mut found = Vec::new();
        self.index.walk(
            |position, letter| constraints.allows(position, letter),
            |depth, node| {
                path.truncate(depth - 1);
                path.push(node.letter());
                if let Some(entry) = node.terminal()
                    && constraints.admits(&path)
                {
                    found.push(Suggestion::from(entry));
                }
            },
        );

        found.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        log::debug!("{} candidates remain", found.len());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Status, Word};
    use crate::fixtures::{REFERENCE_TOTAL, reference_index, reference_words};
    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;
    use proptest::sample::select;
    use Status::{Absent as A, Correct as C, Present as P};

    fn history(records: &[&str]) -> Vec<GuessRecord> {
        records.iter().map(|r| r.parse().unwrap()).collect()
    }

    #[test]
    fn empty_history_returns_whole_dictionary() {
        let index = reference_index();
        let words = index.suggest(&[]);

        assert_eq!(index.total_words(), REFERENCE_TOTAL);
        assert_eq!(words.len(), REFERENCE_TOTAL);
        assert_eq!(words[0], "there");
    }

    #[test]
    fn about_single_guess() {
        let index = reference_index();
        let history = vec![GuessRecord::new("about", &[P, P, C, A, A]).unwrap()];

        assert_eq!(index.suggest(&history), ["broad", "cooba", "broma", "caoba"]);
    }

    #[test]
    fn great_then_there() {
        let index = reference_index();
        let history = vec![
            GuessRecord::new("great", &[A, P, C, A, P]).unwrap(),
            GuessRecord::new("there", &[P, A, C, C, A]).unwrap(),
        ];

        assert_eq!(
            index.suggest(&history),
            ["stern", "utero", "steri", "uteri", "sterk", "stero"]
        );
    }

    #[test]
    fn repeated_letter_gray_does_not_hide_answer() {
        let index = reference_index();
        let answer = Word::new("there").unwrap();
        let history = vec![GuessRecord::scored(Word::new("eerie").unwrap(), &answer)];

        let words = index.suggest(&history);
        assert!(words.contains(&"there"), "{words:?}");
        assert!(!words.contains(&"eerie"));
    }

    #[test]
    fn contradictory_feedback_yields_nothing() {
        let index = reference_index();
        let words = index.suggest(&history(&["crane:GGGGG", "slate:GGGGG"]));
        assert!(words.is_empty());

        // zorba is the only word with a Z, and it has no O in the middle
        let words = index.suggest(&history(&["zzooo:Y-G--"]));
        assert!(words.is_empty());
    }

    #[test]
    fn perfect_feedback_returns_the_word() {
        let index = reference_index();
        assert_eq!(index.suggest(&history(&["robot:GGGGG"])), ["robot"]);
    }

    #[test]
    fn unknown_frequency_ranks_last() {
        let index = TrieIndex::from_text("tetra\ntears 10\nteeth 99\n").unwrap();
        let ranked = Solver::new(&index).suggest_ranked(&[]);

        let words: Vec<&str> = ranked.iter().map(|s| s.word).collect();
        assert_eq!(words, ["teeth", "tears", "tetra"]);
        assert_eq!(ranked[2].frequency, None);
    }

    #[test]
    fn display_spelling_is_returned() {
        let index = TrieIndex::from_text("Broad 5\n").unwrap();
        assert_eq!(index.suggest(&history(&["about:YYG--"])), ["Broad"]);
    }

    #[test]
    fn shorter_and_longer_words_are_skipped_once_guessing() {
        let index = TrieIndex::from_text("stern 3\nster 2\nsterns 1\n").unwrap();
        assert_eq!(index.suggest(&[]).len(), 3);
        assert_eq!(index.suggest(&history(&["great:-YG-Y"])), ["stern"]);
    }

    #[test]
    fn ranked_matches_suggest() {
        let index = reference_index();
        let solver = Solver::new(&index);
        let h = history(&["about:YYG--"]);
        let ranked: Vec<&str> = solver.suggest_ranked(&h).iter().map(|s| s.word).collect();
        assert_eq!(ranked, solver.suggest(&h));
        assert_eq!(solver.suggest_ranked(&[]).len(), REFERENCE_TOTAL);
    }

    fn scored_history(answer: &str, guesses: &[&str]) -> Vec<GuessRecord> {
        let answer = Word::new(answer).unwrap();
        guesses
            .iter()
            .map(|g| GuessRecord::scored(Word::new(g).unwrap(), &answer))
            .collect()
    }

    proptest! {
        #[test]
        fn answer_always_survives(
            answer in select(reference_words()),
            guesses in vec(select(reference_words()), 1..4),
        ) {
            let index = reference_index();
            let history = scored_history(answer, &guesses);
            let words = index.suggest(&history);
            prop_assert!(words.contains(&answer), "{answer} missing for {history:?}");
        }

        #[test]
        fn results_honor_required_letters_and_greens(
            answer in select(reference_words()),
            guesses in vec(select(reference_words()), 1..4),
        ) {
            let index = reference_index();
            let history = scored_history(answer, &guesses);
            let constraints = Constraints::from_history(&history);

            for word in index.suggest(&history) {
                let letters: Vec<char> = word.chars().collect();
                prop_assert_eq!(letters.len(), WORD_LENGTH);
                for required in constraints.required_letters() {
                    prop_assert!(letters.contains(required), "{} lacks {}", word, required);
                }
                for record in &history {
                    for (position, letter, status) in record.observations() {
                        if status == Status::Correct {
                            prop_assert_eq!(letters[position], letter);
                        }
                    }
                }
            }
        }

        #[test]
        fn results_sorted_by_frequency_and_repeatable(
            answer in select(reference_words()),
            guesses in vec(select(reference_words()), 0..3),
        ) {
            let index = reference_index();
            let solver = Solver::new(&index);
            let history = scored_history(answer, &guesses);

            let ranked = solver.suggest_ranked(&history);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].frequency >= pair[1].frequency);
            }

            let mut first = solver.suggest(&history);
            let mut second = solver.suggest(&history);
            first.sort_unstable();
            second.sort_unstable();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn empty_history_matches_distinct_entries(
            entries in vec(("[a-z]{5}", option::of(0u64..1_000_000)), 0..60),
        ) {
            let text: String = entries
                .iter()
                .map(|(word, frequency)| match frequency {
                    Some(f) => format!("{word} {f}\n"),
                    None => format!("{word}\n"),
                })
                .collect();
            let index = TrieIndex::from_text(&text).unwrap();

            let mut distinct: Vec<&str> = entries.iter().map(|(w, _)| w.as_str()).collect();
            distinct.sort_unstable();
            distinct.dedup();

            prop_assert_eq!(index.total_words(), entries.len());
            prop_assert_eq!(index.suggest(&[]).len(), distinct.len());
        }
    }
}
