//! Dictionary statistics command

use crate::solver::{Solver, Suggestion};
use crate::trie::TrieIndex;

/// Summary of a loaded dictionary
pub struct IndexInfo<'a> {
    pub total_words: usize,
    pub distinct_words: usize,
    pub with_frequency: usize,
    pub node_count: usize,
    /// Up to five most frequent words
    pub top_words: Vec<Suggestion<'a>>,
}

#[must_use]
pub fn index_info(index: &TrieIndex) -> IndexInfo<'_> {
    let words = index.words();
    let with_frequency = words.iter().filter(|e| e.frequency().is_some()).count();
    let mut ranked = Solver::new(index).suggest_ranked(&[]);
    ranked.truncate(5);

    IndexInfo {
        total_words: index.total_words(),
        distinct_words: words.len(),
        with_frequency,
        node_count: index.node_count(),
        top_words: ranked,
    }
}
