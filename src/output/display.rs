//! Display functions for command results

use super::formatters::{format_frequency, guess_tiles, rule};
use crate::commands::{IndexInfo, SuggestResult};
use crate::solver::Suggestion;
use colored::Colorize;
use std::io::{self, Write};

/// Write a numbered list of the first `top` candidates
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_candidates<W: Write>(
    out: &mut W,
    candidates: &[Suggestion<'_>],
    top: usize,
) -> io::Result<()> {
    for (i, candidate) in candidates.iter().take(top).enumerate() {
        writeln!(
            out,
            "  {:>3}. {:<8} {:>12}",
            i + 1,
            candidate.word.to_uppercase().bright_white().bold(),
            format_frequency(candidate.frequency).bright_black()
        )?;
    }

    if candidates.len() > top {
        writeln!(out, "  ...and {} more", candidates.len() - top)?;
    }
    Ok(())
}

/// Write the result of a one-shot suggestion query
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_suggest_result<W: Write>(out: &mut W, result: &SuggestResult<'_>) -> io::Result<()> {
    writeln!(out, "\n{}", rule(60).cyan())?;
    for record in &result.history {
        writeln!(out, "  {}", guess_tiles(record))?;
    }
    writeln!(out, "{}", rule(60).cyan())?;

    if result.candidates.is_empty() {
        return writeln!(
            out,
            "{}",
            "❌ No candidates remain. Check the feedback you entered."
                .red()
                .bold()
        );
    }

    writeln!(
        out,
        "{} candidates, most frequent first:",
        result.total.to_string().bright_cyan().bold()
    )?;
    write_candidates(out, &result.candidates, result.candidates.len())?;
    if result.total > result.candidates.len() {
        writeln!(out, "  ...and {} more", result.total - result.candidates.len())?;
    }
    Ok(())
}

/// Print dictionary statistics
pub fn print_index_info(info: &IndexInfo<'_>) {
    println!("\n{}", rule(40).cyan());
    println!(" {}", "DICTIONARY".bright_cyan().bold());
    println!("{}", rule(40).cyan());
    println!("  Entries:         {}", info.total_words);
    println!("  Distinct words:  {}", info.distinct_words);
    println!("  With frequency:  {}", info.with_frequency);
    println!("  Trie nodes:      {}", info.node_count);
    if let Some(top) = info.top_words.first() {
        println!(
            "  Most frequent:   {} ({})",
            top.word.to_uppercase().bright_yellow().bold(),
            format_frequency(top.frequency)
        );
    }
    println!();
}
