//! One-shot suggestion command
//!
//! Parses a guess history from the command line and ranks the candidates.

use crate::core::{GuessError, GuessRecord};
use crate::solver::{Solver, Suggestion};
use crate::trie::TrieIndex;

/// Configuration for a suggestion query
pub struct SuggestConfig {
    /// Guess records as `word:feedback` strings, in the order they were played
    pub guesses: Vec<String>,
    pub top: usize,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(guesses: Vec<String>) -> Self {
        Self { guesses, top: 10 }
    }
}

/// Result of a suggestion query
pub struct SuggestResult<'a> {
    pub history: Vec<GuessRecord>,
    /// The `top` most frequent candidates
    pub candidates: Vec<Suggestion<'a>>,
    /// Number of candidates before truncation
    pub total: usize,
}

/// Rank the candidates for the configured history
///
/// # Errors
///
/// Returns the first `GuessError` met while parsing the guess records.
pub fn run_suggest<'a>(
    index: &'a TrieIndex,
    config: &SuggestConfig,
) -> Result<SuggestResult<'a>, GuessError> {
    let history = config
        .guesses
        .iter()
        .map(|guess| guess.parse::<GuessRecord>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut candidates = Solver::new(index).suggest_ranked(&history);
    let total = candidates.len();
    candidates.truncate(config.top);

    Ok(SuggestResult {
        history,
        candidates,
        total,
    })
}
