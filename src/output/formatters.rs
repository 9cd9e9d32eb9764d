//! Formatting utilities for terminal output

use crate::core::{GuessRecord, Status};
use colored::{ColoredString, Colorize};

/// Format a frequency with thousands separators, or "-" when unknown
#[must_use]
pub fn format_frequency(frequency: Option<u64>) -> String {
    let Some(value) = frequency else {
        return "-".to_string();
    };

    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Paint one letter tile in its feedback color
#[must_use]
pub fn letter_tile(letter: char, status: Status) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Status::Correct => text.black().on_green().bold(),
        Status::Present => text.black().on_yellow().bold(),
        Status::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as colored tiles followed by its emoji feedback
#[must_use]
pub fn guess_tiles(record: &GuessRecord) -> String {
    let tiles: String = record
        .observations()
        .map(|(_, letter, status)| letter_tile(letter, status).to_string())
        .collect();
    format!("{tiles}  {}", record.feedback().to_emoji())
}

/// A horizontal rule of the given width
#[must_use]
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}
