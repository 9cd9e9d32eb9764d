//! Wordle Trie - CLI
//!
//! Suggests candidate words for a five-letter word game from the feedback of
//! earlier guesses.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_trie::{
    TrieIndex,
    commands::{SessionOptions, SuggestConfig, index_info, run_session, run_suggest},
    output::{print_index_info, write_suggest_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_trie",
    about = "Trie-backed Wordle candidate filter ranked by word frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with one `word frequency` pair per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggest a guess, enter feedback, repeat
    Play {
        /// Number of candidates to list each turn
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Suggest a random word among the listed candidates
        #[arg(short, long)]
        random: bool,
    },

    /// Rank the candidates left by a list of guesses
    Suggest {
        /// Guesses as word:feedback, e.g. about:YYG-- (G green, Y yellow, - gray)
        guesses: Vec<String>,

        /// Number of candidates to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Show dictionary statistics
    Info,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_index(dictionary: Option<&PathBuf>) -> Result<TrieIndex> {
    match dictionary {
        Some(path) => TrieIndex::from_path(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display())),
        None => TrieIndex::embedded().context("Failed to load built-in dictionary"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let index = load_index(cli.dictionary.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        top: 10,
        random: false,
    });

    match command {
        Commands::Play { top, random } => run_play_command(&index, top, random),
        Commands::Suggest { guesses, top } => run_suggest_command(&index, guesses, top),
        Commands::Info => {
            print_index_info(&index_info(&index));
            Ok(())
        }
    }
}

fn run_play_command(index: &TrieIndex, top: usize, random: bool) -> Result<()> {
    let options = SessionOptions { top, random };
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_session(index, options, stdin, &mut stdout).context("Interactive session failed")
}

fn run_suggest_command(index: &TrieIndex, guesses: Vec<String>, top: usize) -> Result<()> {
    let config = SuggestConfig { guesses, top };
    let result = run_suggest(index, &config).context("Invalid guess")?;
    write_suggest_result(&mut io::stdout().lock(), &result)
        .context("Failed to write suggestions")
}
