//! Prefix-tree index over a dictionary
//!
//! Every path from the root to a terminal node spells one dictionary word.
//! Words sharing a prefix share its nodes. The index is built once and is
//! read-only afterwards, so a shared `&TrieIndex` can serve any number of
//! concurrent queries.

mod node;

pub use node::{ROOT_MARKER, TerminalEntry, TrieNode};

use crate::core::GuessRecord;
use crate::dictionary::{DictionaryEntry, DictionaryError, EMBEDDED_DICTIONARY, loader};
use crate::solver::Solver;
use std::path::Path;

/// Dictionary indexed as a trie
#[derive(Debug, Clone)]
pub struct TrieIndex {
    root: TrieNode,
    total_words: usize,
    node_count: usize,
}

impl TrieIndex {
    /// Build an index from dictionary entries
    ///
    /// Each word is lower-cased to find its path; the terminal node keeps the
    /// original spelling. A word listed twice keeps its last entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::dictionary::DictionaryEntry;
    /// use wordle_trie::trie::TrieIndex;
    ///
    /// let index = TrieIndex::build([
    ///     DictionaryEntry::new("crane", Some(10)),
    ///     DictionaryEntry::new("crate", None),
    /// ]);
    /// assert_eq!(index.total_words(), 2);
    /// assert!(index.contains("CRATE"));
    /// ```
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut index = Self {
            root: TrieNode::root(),
            total_words: 0,
            node_count: 1,
        };
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Load and index a dictionary file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NotFound` if the file does not exist and
    /// `DictionaryError::Parse` if a frequency is malformed. No index is
    /// produced on error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let index = Self::build(loader::load_from_file(path)?);
        log::info!(
            "Indexed {} words ({} nodes) from {}",
            index.total_words,
            index.node_count,
            path.display()
        );
        Ok(index)
    }

    /// Index dictionary text held in memory
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Parse` if a frequency is malformed.
    pub fn from_text(data: &str) -> Result<Self, DictionaryError> {
        Ok(Self::build(loader::entries_from_str(data)?))
    }

    /// Index the sample dictionary compiled into the crate
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        let index = Self::from_text(EMBEDDED_DICTIONARY)?;
        log::info!(
            "Indexed {} words ({} nodes) from embedded dictionary",
            index.total_words,
            index.node_count
        );
        Ok(index)
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        self.total_words += 1;

        let mut node = &mut self.root;
        for letter in entry.word.to_lowercase().chars() {
            let (child, created) = node.child_or_insert(letter);
            if created {
                self.node_count += 1;
            }
            node = child;
        }

        if let Some(previous) = node.mark_terminal(entry.word, entry.frequency) {
            log::trace!("duplicate dictionary entry replaces {:?}", previous.word());
        }
    }

    /// Number of dictionary entries processed, duplicates included
    #[inline]
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of nodes in the tree, root included
    #[inline]
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Look up a word (case-insensitively)
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&TerminalEntry> {
        word.to_lowercase()
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
            .and_then(TrieNode::terminal)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// All distinct words in lexicographic order of their lower-cased form
    #[must_use]
    pub fn words(&self) -> Vec<&TerminalEntry> {
        let mut words = Vec::new();
        self.walk(
            |_, _| true,
            |_, node| {
                if let Some(entry) = node.terminal() {
                    words.push(entry);
                }
            },
        );
        words
    }

    /// Candidates consistent with `history`, most frequent first
    ///
    /// An empty history returns every word. See [`Solver::suggest`].
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::GuessRecord;
    /// use wordle_trie::trie::TrieIndex;
    ///
    /// let index = TrieIndex::from_text("crane 50\ncrate 90\nslate 70\n").unwrap();
    /// let history: Vec<GuessRecord> = vec!["trace:YGGYG".parse().unwrap()];
    /// assert_eq!(index.suggest(&history), ["crate"]);
    /// ```
    #[must_use]
    pub fn suggest(&self, history: &[GuessRecord]) -> Vec<&str> {
        Solver::new(self).suggest(history)
    }

    /// Depth-first walk in letter order
    ///
    /// `enter(position, letter)` decides whether the child holding `letter`
    /// at 0-based `position` is descended into. `visit(depth, node)` is called
    /// for every entered node, where `depth` is the number of letters on the
    /// path to it.
    pub(crate) fn walk<'a, E, V>(&'a self, enter: E, mut visit: V)
    where
        E: Fn(usize, char) -> bool,
        V: FnMut(usize, &'a TrieNode),
    {
        fn descend<'a, E, V>(node: &'a TrieNode, depth: usize, enter: &E, visit: &mut V)
        where
            E: Fn(usize, char) -> bool,
            V: FnMut(usize, &'a TrieNode),
        {
            for child in node.children() {
                if enter(depth, child.letter()) {
                    visit(depth + 1, child);
                    descend(child, depth + 1, enter, visit);
                }
            }
        }

        descend(&self.root, 0, &enter, &mut visit);
    }
}
