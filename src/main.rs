//! Strictly Guesser - console front end
//!
//! All game logic lives in the library; this binary only reads lines,
//! feeds them to the session, and renders the typed outcomes.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use strictly_guesser::{GameConfig, GameSession, SubmitOutcome};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    info!(?config, "Starting Strictly Guesser");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        play_game(&config, &mut lines)?;
        if !ask_play_again(&mut lines)? {
            println!("Thanks for playing! Goodbye!");
            break;
        }
        println!("\n{}\n", "=".repeat(50));
    }

    Ok(())
}

/// Merges defaults, optional config file, and CLI flag overrides.
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let config = GameConfig::new(
        cli.min.unwrap_or(*base.min()),
        cli.max.unwrap_or(*base.max()),
        cli.guesses.unwrap_or(*base.max_guesses()),
        cli.hints.unwrap_or(*base.max_hints()),
    );

    // Surface an inverted range before the first session is built.
    config.range()?;
    Ok(config)
}

/// Runs one game to completion (or until stdin closes).
fn play_game(
    config: &GameConfig,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let mut session = GameSession::new(config)?;

    println!("Welcome to the Number Guesser Game!");
    println!(
        "I've picked a number between {} and {}.",
        session.range().min(),
        session.range().max()
    );
    println!(
        "You have {} guesses to find it, and up to {} hints (type 'hint').",
        session.remaining_guesses(),
        session.remaining_hints()
    );
    println!("Let's begin!\n");

    loop {
        println!(
            "Remaining guesses: {} | Remaining hints: {}",
            session.remaining_guesses(),
            session.remaining_hints()
        );
        print!("Enter your guess or type 'hint': ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                debug!("Input stream closed mid-game");
                return Ok(());
            }
        };

        match session.submit(&line) {
            Ok(outcome) => {
                let finished = render_outcome(&outcome);
                println!();
                if finished {
                    return Ok(());
                }
            }
            Err(closed) => {
                // Unreachable from this loop, which stops on terminal
                // outcomes; rendered anyway for completeness.
                println!("{}", closed);
                return Ok(());
            }
        }
    }
}

/// Prints one outcome; returns true when the session is finished.
fn render_outcome(outcome: &SubmitOutcome) -> bool {
    match outcome {
        SubmitOutcome::HintIssued(hint) => {
            println!("Hint: {}", hint.text());
            false
        }
        SubmitOutcome::HintsExhausted => {
            println!("Sorry, you have no hints remaining!");
            false
        }
        SubmitOutcome::InvalidInput(reason) => {
            println!("Invalid input: {}. Enter a number or 'hint'.", reason);
            false
        }
        SubmitOutcome::WrongGuess { .. } => {
            println!("Wrong guess! Try again.");
            false
        }
        SubmitOutcome::Won { secret } => {
            println!("Congratulations! You guessed it! The number was {}.", secret);
            true
        }
        SubmitOutcome::Lost { secret } => {
            println!("Game over! You're out of guesses. The number was {}.", secret);
            true
        }
    }
}

/// Asks for a yes/no replay decision; stdin closing means no.
fn ask_play_again(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<bool> {
    loop {
        print!("Would you like to play again? (yes/no): ");
        io::stdout().flush()?;

        let answer = match lines.next() {
            Some(line) => line?,
            None => return Ok(false),
        };

        match answer.trim().to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Please enter 'yes' or 'no'."),
        }
    }
}
