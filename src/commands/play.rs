//! Interactive play loop
//!
//! Text-based front end for the engine. Reads whole guesses line by line and
//! writes plain text, so it runs the same on a terminal and in tests.

use crate::game::{GameEngine, MAX_TURNS, Response};
use crate::output::{write_keyboard, write_scored_guess, write_stats};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};

/// Options for a play session
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Use this answer for every game instead of drawing from the pool
    pub fixed_answer: Option<String>,
}

enum Command {
    Quit,
    NewGame,
    Stats,
    Guess(String),
}

fn parse_command(line: &str) -> Command {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        "stats" => Command::Stats,
        _ => Command::Guess(line.to_string()),
    }
}

/// Run games until the player quits or input runs out
///
/// # Errors
///
/// Returns an error if a game cannot be started (unreadable answer list,
/// invalid fixed answer) or on I/O failure.
pub fn run_play<R, I, W>(
    engine: &mut GameEngine<R>,
    config: &PlayConfig,
    mut input: I,
    mut out: W,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(out, "Commands: 'new' for a new game, 'stats', 'quit' to exit\n")?;

    start_game(engine, config)?;

    loop {
        let Some(line) = prompt(&mut input, &mut out, &format!("Turn {}", engine.turn()))? else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::NewGame => {
                start_game(engine, config)?;
                writeln!(out, "\nNew game started!\n")?;
            }
            Command::Stats => match engine.stats() {
                Some(stats) => write_stats(&mut out, &stats)?,
                None => writeln!(out, "No games finished yet.")?,
            },
            Command::Guess(guess) => {
                let submission = engine.submit_guess(&guess);

                if let Response::Invalid(err) = &submission.response {
                    writeln!(out, "{err}")?;
                    continue;
                }

                for (i, scored) in engine.history().iter().enumerate() {
                    write_scored_guess(&mut out, i + 1, scored)?;
                }
                writeln!(out)?;
                write_keyboard(&mut out, engine.tracker())?;

                if submission.response.is_game_end() {
                    writeln!(out, "\n{}", submission.response)?;
                    if let Response::Solved(rating) = submission.response {
                        writeln!(out, "Solved in {}/{MAX_TURNS}", rating.turn())?;
                    }
                    if let Some(stats) = engine.stats() {
                        write_stats(&mut out, &stats)?;
                    }

                    let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?
                        .unwrap_or_default()
                        .to_lowercase();
                    if again != "yes" && again != "y" {
                        break;
                    }
                    start_game(engine, config)?;
                    writeln!(out, "\nNew game started!\n")?;
                }
            }
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}

fn start_game<R: Rng>(engine: &mut GameEngine<R>, config: &PlayConfig) -> Result<()> {
    engine
        .new_game(config.fixed_answer.as_deref())
        .context("Failed to start a new game")
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
