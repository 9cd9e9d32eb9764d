//! Dictionary sources for the trie index
//!
//! Parses `word [frequency]` lines from files or embedded text.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_DICTIONARY;

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// One dictionary line: a word as written, plus its optional usage weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    pub frequency: Option<u64>,
}

impl DictionaryEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, frequency: Option<u64>) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file does not exist.
    #[error("dictionary file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("could not open dictionary file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read dictionary data")]
    Read(#[source] io::Error),

    /// A frequency token is present but is not a non-negative integer.
    #[error("line {line}: invalid frequency {token:?}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}
