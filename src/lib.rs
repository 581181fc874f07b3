//! Strictly Guesser library - type-safe number guessing engine
//!
//! This library implements the core of a guess-the-number game: a secret
//! drawn uniformly from a configured range, a guess budget, and a hint
//! budget spent on randomly selected hints about the secret.
//!
//! # Architecture
//!
//! - **Session**: owns the secret and both budgets, drives the turn
//!   state machine (active / won / lost)
//! - **HintEngine**: dispenses divisibility, comparison, and parity
//!   hints, one budget unit per hint
//! - **GuessEvaluator**: pure parsing and checking of candidate guesses
//! - **Range math**: factors and in-range multiples the hints draw from
//!
//! Console I/O lives entirely in the binary; the library exchanges
//! typed [`SubmitOutcome`] events with its caller.
//!
//! # Example
//!
//! ```
//! use strictly_guesser::{GameConfig, GameSession, SubmitOutcome};
//!
//! # fn example() -> Result<(), strictly_guesser::RangeError> {
//! let config = GameConfig::default();
//! let mut session = GameSession::new(&config)?;
//!
//! match session.submit("hint") {
//!     Ok(SubmitOutcome::HintIssued(hint)) => println!("{}", hint.text()),
//!     Ok(other) => println!("{:?}", other),
//!     Err(closed) => println!("{}", closed),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod budget;
mod config;
mod guess;
mod hint;
mod range;
mod session;

// Crate-level exports - Budgets
pub use budget::{Budget, ExhaustedBudget};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Guess evaluation
pub use guess::{GuessError, GuessEvaluator};

// Crate-level exports - Hints
pub use hint::{Hint, HintCategory, HintEngine, HintFact};

// Crate-level exports - Range math
pub use range::{Range, RangeError, factors, multiples};

// Crate-level exports - Session state machine
pub use session::{
    GameSession, HINT_COMMAND, SessionClosed, SessionState, SubmitOutcome,
};
