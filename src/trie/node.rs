//! Trie node model

/// Letter stored on the root node; never a dictionary letter.
pub const ROOT_MARKER: char = '/';

/// Data carried by a node where a dictionary word ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalEntry {
    word: String,
    frequency: Option<u64>,
}

impl TerminalEntry {
    /// The word as spelled in the dictionary (original casing)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> Option<u64> {
        self.frequency
    }
}

/// A letter node; owns its children, which are kept sorted by letter
#[derive(Debug, Clone)]
pub struct TrieNode {
    letter: char,
    children: Vec<TrieNode>,
    terminal: Option<TerminalEntry>,
}

impl TrieNode {
    pub(crate) const fn root() -> Self {
        Self::new(ROOT_MARKER)
    }

    const fn new(letter: char) -> Self {
        Self {
            letter,
            children: Vec::new(),
            terminal: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub const fn terminal(&self) -> Option<&TerminalEntry> {
        self.terminal.as_ref()
    }

    /// Find the child for `letter`
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&letter, TrieNode::letter)
            .ok()
            .map(|i| &self.children[i])
    }

    /// Find the child for `letter`, creating it if absent
    ///
    /// Returns the child and whether it was newly created.
    pub(crate) fn child_or_insert(&mut self, letter: char) -> (&mut TrieNode, bool) {
        match self
            .children
            .binary_search_by_key(&letter, TrieNode::letter)
        {
            Ok(i) => (&mut self.children[i], false),
            Err(i) => {
                self.children.insert(i, TrieNode::new(letter));
                (&mut self.children[i], true)
            }
        }
    }

    /// Mark this node as the end of `word`
    ///
    /// Returns the entry it replaced, if the word was already present.
    pub(crate) fn mark_terminal(
        &mut self,
        word: String,
        frequency: Option<u64>,
    ) -> Option<TerminalEntry> {
        self.terminal.replace(TerminalEntry { word, frequency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_stay_sorted_and_unique() {
        let mut root = TrieNode::root();
        for letter in ['m', 'c', 'x', 'c', 'a', 'm'] {
            root.child_or_insert(letter);
        }

        let letters: Vec<char> = root.children().iter().map(TrieNode::letter).collect();
        assert_eq!(letters, ['a', 'c', 'm', 'x']);
    }

    #[test]
    fn child_or_insert_reports_creation() {
        let mut root = TrieNode::root();
        assert!(root.child_or_insert('q').1);
        assert!(!root.child_or_insert('q').1);
    }

    #[test]
    fn child_lookup() {
        let mut root = TrieNode::root();
        root.child_or_insert('b');
        assert_eq!(root.child('b').map(TrieNode::letter), Some('b'));
        assert!(root.child('z').is_none());
    }

    #[test]
    fn terminal_entry_replaced_on_repeat() {
        let mut node = TrieNode::root();
        assert!(node.terminal().is_none());

        assert!(node.mark_terminal("Crane".to_string(), Some(3)).is_none());
        let previous = node.mark_terminal("crane".to_string(), None).unwrap();

        assert_eq!(previous.word(), "Crane");
        assert_eq!(previous.frequency(), Some(3));
        assert_eq!(node.terminal().unwrap().word(), "crane");
        assert_eq!(node.terminal().unwrap().frequency(), None);
    }

    #[test]
    fn root_uses_marker() {
        assert_eq!(TrieNode::root().letter(), ROOT_MARKER);
    }
}
