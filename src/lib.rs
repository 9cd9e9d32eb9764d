//! Wordle Trie
//!
//! Candidate filter for five-letter word games. A frequency-weighted
//! dictionary is indexed as a trie, and the feedback from earlier guesses
//! prunes the walk over it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_trie::core::GuessRecord;
//! use wordle_trie::trie::TrieIndex;
//!
//! let index = TrieIndex::from_text("broad 91000\ncaoba 2600\nboard 88000\n").unwrap();
//! let history: Vec<GuessRecord> = vec!["about:YYG--".parse().unwrap()];
//!
//! assert_eq!(index.suggest(&history), ["broad", "caoba"]);
//! ```

/// Letters in every playable word
pub const WORD_LENGTH: usize = 5;

// Core domain types
pub mod core;

// Dictionary parsing
pub mod dictionary;

// Prefix-tree index
pub mod trie;

// Constraint engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
mod fixtures;

pub use trie::TrieIndex;
