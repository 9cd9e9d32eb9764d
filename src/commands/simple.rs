//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the feedback, narrows the candidates, repeats.

use crate::core::{Feedback, GuessRecord, Word};
use crate::output::formatters::{guess_tiles, rule};
use crate::output::write_candidates;
use crate::solver::Solver;
use crate::trie::TrieIndex;
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, BufRead, Write};

/// Options for the interactive session
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// How many candidates to list each turn
    pub top: usize,
    /// Suggest a random word among the listed candidates instead of the most frequent
    pub random: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            top: 10,
            random: false,
        }
    }
}

/// Pick one item uniformly at random
pub fn pick_one<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

enum Input {
    Quit,
    NewGame,
    Undo,
    Win,
    Feedback(Feedback),
    Record(GuessRecord),
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        "win" | "correct" | "solved" => Input::Win,
        _ => {
            if let Ok(feedback) = line.parse::<Feedback>() {
                return Input::Feedback(feedback);
            }
            match line.parse::<GuessRecord>() {
                Ok(record) => Input::Record(record),
                Err(e) => Input::Invalid(e.to_string()),
            }
        }
    }
}

/// Run the interactive session until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    index: &TrieIndex,
    options: SessionOptions,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    let solver = Solver::new(index);
    let mut rng = rand::rng();
    let mut history: Vec<GuessRecord> = Vec::new();

    writeln!(out, "\n{}", "Wordle Trie - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "After each guess, enter what the game showed:")?;
    writeln!(out, "  - 'word:feedback' (e.g. crane:-Y-G-) for any guess")?;
    writeln!(out, "  - just the feedback to score the suggested guess")?;
    writeln!(out, "  - G/g/🟩 green, Y/y/🟨 yellow, -/_/x/⬜ gray")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    loop {
        let candidates = solver.suggest_ranked(&history);

        writeln!(out, "{}", rule(60))?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining",
            history.len() + 1,
            candidates.len()
        )?;
        writeln!(out, "{}", rule(60))?;

        let suggested = if candidates.is_empty() {
            writeln!(out, "\n❌ No candidates remain! Your feedback may be incorrect.")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
            None
        } else {
            write_candidates(out, &candidates, options.top)?;
            let listed = &candidates[..candidates.len().min(options.top)];
            let pick = if options.random {
                pick_one(listed, &mut rng)
            } else {
                listed.first()
            };
            if let Some(pick) = pick {
                writeln!(
                    out,
                    "\n📊 Suggested guess: {}\n",
                    pick.word.to_uppercase().bright_yellow().bold()
                )?;
            }
            pick.map(|suggestion| suggestion.word)
        };

        let Some(line) = prompt(&mut input, out, "Enter feedback, word:feedback, or command")?
        else {
            return Ok(());
        };

        let pending: Pending = match parse_input(&line) {
            Input::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Input::NewGame => {
                history.clear();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            Input::Undo => {
                if history.pop().is_some() {
                    writeln!(out, "✓ Undone! Back to turn {}\n", history.len() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
                continue;
            }
            Input::Invalid(message) => {
                writeln!(out, "❌ {message}\n")?;
                continue;
            }
            Input::Record(record) => record.into(),
            Input::Win => Feedback::PERFECT.into(),
            Input::Feedback(feedback) => feedback.into(),
        };

        let record = match pending {
            Pending::Ready(record) => record,
            Pending::ForSuggestion(feedback) => match suggested_word(suggested) {
                Ok(word) => GuessRecord::from_parts(word, feedback),
                Err(message) => {
                    writeln!(out, "❌ {message}\n")?;
                    continue;
                }
            },
        };

        if !index.contains(record.word().text()) {
            writeln!(
                out,
                "⚠ {} is not in the dictionary",
                record.word().text().to_uppercase()
            )?;
        }
        log::debug!("Recorded guess {record}");

        let solved = record.feedback().is_perfect();
        history.push(record);

        if solved {
            write_solved(out, &history)?;
            let again = prompt(&mut input, out, "Play again? (yes/no)")?;
            if matches!(again.as_deref(), Some("yes" | "y")) {
                history.clear();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
    }
}

/// A record that may still need the suggested word
enum Pending {
    Ready(GuessRecord),
    ForSuggestion(Feedback),
}

impl From<GuessRecord> for Pending {
    fn from(record: GuessRecord) -> Self {
        Self::Ready(record)
    }
}

impl From<Feedback> for Pending {
    fn from(feedback: Feedback) -> Self {
        Self::ForSuggestion(feedback)
    }
}

fn suggested_word(suggested: Option<&str>) -> Result<Word, String> {
    let word = suggested.ok_or("No suggestion to score; enter word:feedback instead")?;
    Word::new(word).map_err(|e| format!("Suggested word {word:?} cannot be scored: {e}"))
}

fn write_solved<W: Write>(out: &mut W, history: &[GuessRecord]) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉  W O R D L E   S O L V E D !  🎉    "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

    let turns = history.len();
    writeln!(
        out,
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;
    writeln!(out, "\n  Guess history:")?;
    for (i, record) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            guess_tiles(record)
        )?;
    }
    writeln!(out)
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{REFERENCE_TOTAL, reference_index};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(input: &str, options: SessionOptions) -> String {
        colored::control::set_override(false);
        let index = reference_index();
        let mut out = Vec::new();
        run_session(&index, options, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn record_narrows_candidates() {
        let text = run("about:YYG--\nquit\n", SessionOptions::default());

        assert!(text.contains(&format!("Turn 1: {REFERENCE_TOTAL} candidates remaining")));
        assert!(text.contains("Turn 2: 4 candidates remaining"));
        assert!(text.contains("BROAD"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn bare_feedback_scores_the_suggestion() {
        // THERE is the most frequent word, so it is suggested first
        let text = run("Y-GG-\nquit\n", SessionOptions::default());

        assert!(text.contains("Suggested guess: THERE"));
        assert!(text.contains("Turn 2: 7 candidates remaining"));
    }

    #[test]
    fn undo_restores_previous_turn() {
        let text = run("about:YYG--\nundo\nundo\nquit\n", SessionOptions::default());

        assert!(text.contains("Undone! Back to turn 1"));
        assert!(text.contains("Nothing to undo!"));
        assert_eq!(
            text.matches(&format!("Turn 1: {REFERENCE_TOTAL} candidates"))
                .count(),
            3
        );
    }

    #[test]
    fn new_game_clears_history() {
        let text = run("about:YYG--\nnew\nquit\n", SessionOptions::default());
        assert!(text.contains("New game started!"));
        assert_eq!(
            text.matches(&format!("Turn 1: {REFERENCE_TOTAL} candidates"))
                .count(),
            2
        );
    }

    #[test]
    fn perfect_feedback_ends_the_game() {
        let text = run("robot:GGGGG\nno\n", SessionOptions::default());
        assert!(text.contains("S O L V E D"));
        assert!(text.contains("Solved in 1 guess"));
        assert!(text.contains("Play again?"));
    }

    #[test]
    fn win_command_uses_the_suggestion() {
        let text = run("win\nyes\nquit\n", SessionOptions::default());
        assert!(text.contains("Solved in 1 guess"));
        assert!(text.contains(" T  H  E  R  E "));
        assert!(text.contains("New game started!"));
    }

    #[test]
    fn contradictory_feedback_reports_no_candidates() {
        let text = run("zzooo:Y-G--\nquit\n", SessionOptions::default());
        assert!(text.contains("ZZOOO is not in the dictionary"));
        assert!(text.contains("No candidates remain!"));
    }

    #[test]
    fn feedback_without_suggestion_is_rejected() {
        let text = run("zzooo:Y-G--\nGGGGG\nquit\n", SessionOptions::default());
        assert!(text.contains("No suggestion to score"));
    }

    #[test]
    fn invalid_input_is_reported() {
        let text = run("hello\n", SessionOptions::default());
        assert!(text.contains("malformed guess"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let text = run("", SessionOptions::default());
        assert!(text.contains("Turn 1:"));
    }

    #[test]
    fn random_suggestion_stays_in_listed_candidates() {
        let options = SessionOptions {
            top: 3,
            random: true,
        };
        let text = run("quit\n", options);
        assert!(
            ["THERE", "GREAT", "ABOUT"]
                .iter()
                .any(|w| text.contains(&format!("Suggested guess: {w}")))
        );
        assert!(text.contains(&format!("...and {} more", REFERENCE_TOTAL - 3)));
    }

    #[test]
    fn pick_one_from_slice() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = [1, 2, 3];
        for _ in 0..20 {
            assert!(items.contains(pick_one(&items, &mut rng).unwrap()));
        }
        let empty: [u8; 0] = [];
        assert!(pick_one(&empty, &mut rng).is_none());
    }
}
