//! Command-line interface for strictly_guesser.

use clap::Parser;

/// Strictly Guesser - guess the secret number before your guesses run out
#[derive(Parser, Debug)]
#[command(name = "strictly_guesser")]
#[command(about = "Number guessing game with a budgeted hint system", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Lower bound of the secret's range (inclusive)
    #[arg(long)]
    pub min: Option<i64>,

    /// Upper bound of the secret's range (inclusive)
    #[arg(long)]
    pub max: Option<i64>,

    /// Number of guesses allowed per game
    #[arg(long)]
    pub guesses: Option<u32>,

    /// Number of hints allowed per game
    #[arg(long)]
    pub hints: Option<u32>,

    /// Path to a TOML config file (flags above override its values)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}
