//! Embedded sample dictionary
//!
//! Compiled into the binary so the CLI works without a dictionary file.

pub const EMBEDDED_DICTIONARY: &str = include_str!("../../data/dictionary.txt");
