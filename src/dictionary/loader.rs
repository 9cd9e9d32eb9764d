//! Dictionary file parsing
//!
//! One entry per line: a word, optionally followed by whitespace and a
//! non-negative integer frequency. Lines are trimmed and the first blank
//! line ends the data.

use super::{DictionaryEntry, DictionaryError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parse one trimmed, non-empty dictionary line
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns `DictionaryError::Parse` if a frequency token is present but is
/// not a valid non-negative integer.
pub fn parse_line(line_number: usize, line: &str) -> Result<DictionaryEntry, DictionaryError> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next().unwrap_or_default();

    let frequency = tokens
        .next()
        .map(|token| {
            token.parse::<u64>().map_err(|source| DictionaryError::Parse {
                line: line_number,
                token: token.to_string(),
                source,
            })
        })
        .transpose()?;

    if tokens.next().is_some() {
        log::trace!("line {line_number}: ignoring tokens after frequency");
    }

    Ok(DictionaryEntry::new(word, frequency))
}

/// Read entries from any buffered reader
///
/// Stops at the first blank line or at end of input. Either the whole input
/// parses or the first error is returned; there is no partial result.
///
/// # Errors
///
/// Returns `DictionaryError::Read` on a read failure and
/// `DictionaryError::Parse` on a malformed frequency.
pub fn entries_from_reader<R: BufRead>(reader: R) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(DictionaryError::Read)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        entries.push(parse_line(index + 1, trimmed)?);
    }

    Ok(entries)
}

/// Read entries from in-memory text
///
/// # Errors
///
/// Returns `DictionaryError::Parse` on a malformed frequency.
///
/// # Examples
/// ```
/// use wordle_trie::dictionary::loader::entries_from_str;
///
/// let entries = entries_from_str("crane 1200\nslate\n\nignored 5").unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].frequency, Some(1200));
/// assert_eq!(entries[1].frequency, None);
/// ```
pub fn entries_from_str(data: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    entries_from_reader(data.as_bytes())
}

/// Load entries from a file
///
/// # Errors
///
/// Returns `DictionaryError::NotFound` if the file does not exist,
/// `DictionaryError::Io` if it cannot be opened, `DictionaryError::Read` if
/// reading it fails, and
/// `DictionaryError::Parse` on a malformed frequency.
///
/// # Examples
/// ```no_run
/// use wordle_trie::dictionary::loader::load_from_file;
///
/// let entries = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    entries_from_reader(BufReader::new(file))
}
