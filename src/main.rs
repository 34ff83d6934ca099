//! Wordle Game - CLI
//!
//! Plain-text front end for the Wordle engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{PlayConfig, run_play},
    core::{Word, score_guess},
    game::GameEngine,
    output::formatters::scored_guess_to_emoji,
    wordlists::{ANSWERS, GUESSES, WordListSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Use this answer for every game
        #[arg(short, long)]
        answer: Option<String>,

        /// Newline-delimited answer list (default: embedded list)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Newline-delimited list of accepted guesses (default: embedded list)
        #[arg(long)]
        guesses: Option<PathBuf>,

        /// Seed for the answer shuffle, for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a single guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn source_for(path: Option<PathBuf>, embedded: &'static [&'static str]) -> WordListSource {
    path.map_or(WordListSource::Embedded(embedded), WordListSource::File)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        answer: None,
        answers: None,
        guesses: None,
        seed: None,
    });

    match command {
        Commands::Play {
            answer,
            answers,
            guesses,
            seed,
        } => {
            let answers = source_for(answers, ANSWERS);
            let guesses = source_for(guesses, GUESSES);
            run_play_command(answers, guesses, seed, answer)
        }
        Commands::Score { guess, answer } => run_score_command(&guess, &answer),
    }
}

fn run_play_command(
    answers: WordListSource,
    guesses: WordListSource,
    seed: Option<u64>,
    answer: Option<String>,
) -> Result<()> {
    let mut engine = match seed {
        Some(seed) => GameEngine::with_seed(answers, guesses, seed),
        None => GameEngine::new(answers, guesses),
    }
    .context("Failed to load word lists")?;

    let config = PlayConfig {
        fixed_answer: answer,
    };
    run_play(&mut engine, &config, io::stdin().lock(), io::stdout().lock())
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let guess = Word::new(guess).context("Invalid guess")?;
    let answer = Word::new(answer).context("Invalid answer")?;

    let scored = score_guess(&guess, &answer);
    println!(
        "{} {}",
        scored_guess_to_emoji(&scored),
        guess.text().to_uppercase()
    );
    Ok(())
}
