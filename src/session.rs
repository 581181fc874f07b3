//! Game session lifecycle: turn sequence, budgets, and terminal outcome.

use crate::budget::Budget;
use crate::config::GameConfig;
use crate::guess::{GuessError, GuessEvaluator};
use crate::hint::{Hint, HintEngine};
use crate::range::{Range, RangeError};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Literal command, matched case-insensitively, that requests a hint
/// instead of submitting a guess.
pub const HINT_COMMAND: &str = "hint";

/// Lifecycle state of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum SessionState {
    /// Accepting guesses and hint requests.
    Active,
    /// The secret was guessed; terminal.
    Won,
    /// The guess budget ran out; terminal.
    Lost,
}

/// Outcome of a single `submit` call, for the console collaborator to
/// render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// A hint was produced; one hint budget unit was consumed.
    HintIssued(Hint),
    /// A hint was requested with none remaining; nothing changed.
    HintsExhausted,
    /// The input was not a usable guess; nothing changed.
    InvalidInput(GuessError),
    /// The guess missed; carries the guesses left.
    WrongGuess {
        /// Guess budget units remaining after this miss.
        remaining: u32,
    },
    /// The guess matched the secret; session is now terminal.
    Won {
        /// The revealed secret.
        secret: i64,
    },
    /// The final guess missed; session is now terminal.
    Lost {
        /// The revealed secret.
        secret: i64,
    },
}

/// A submit was attempted on a session that already reached a terminal
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("session is closed: {outcome}")]
pub struct SessionClosed {
    /// The terminal state the session finished in.
    pub outcome: SessionState,
}

/// A single game of guess-the-number.
///
/// Owns the secret, the range, and both budgets for its whole lifetime;
/// the hint engine and guess evaluator borrow them per call. The secret
/// is drawn once at construction and never changes. There is no implicit
/// restart: a new game requires a fresh session with a freshly sampled
/// secret.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = StdRng> {
    range: Range,
    secret: i64,
    guesses: Budget,
    hints: Budget,
    state: SessionState,
    rng: R,
}

impl GameSession<StdRng> {
    /// Creates a session from `config` with an OS-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvertedBounds`] when the configured range
    /// is invalid.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Result<Self, RangeError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session drawing its secret from the supplied random
    /// source, which the session retains for hint generation.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvertedBounds`] when the configured range
    /// is invalid.
    #[instrument(skip(config, rng))]
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self, RangeError> {
        let range = config.range()?;
        let secret = range.sample(&mut rng);
        info!(
            min = range.min(),
            max = range.max(),
            max_guesses = *config.max_guesses(),
            max_hints = *config.max_hints(),
            "Creating new game session"
        );
        Ok(Self {
            range,
            secret,
            guesses: Budget::new(*config.max_guesses()),
            hints: Budget::new(*config.max_hints()),
            state: SessionState::Active,
            rng,
        })
    }

    /// Creates a session with a fixed secret instead of sampling one,
    /// for deterministic play and scripted tests. The random source is
    /// still used for hint generation.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OutOfBounds`] when `secret` lies outside
    /// the configured range, or [`RangeError::InvertedBounds`] when the
    /// range itself is invalid.
    #[instrument(skip(config, rng))]
    pub fn with_secret(config: &GameConfig, secret: i64, rng: R) -> Result<Self, RangeError> {
        let range = config.range()?;
        if !range.contains(secret) {
            return Err(RangeError::out_of_bounds(secret, &range));
        }
        Ok(Self {
            range,
            secret,
            guesses: Budget::new(*config.max_guesses()),
            hints: Budget::new(*config.max_hints()),
            state: SessionState::Active,
            rng,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The range the secret was drawn from.
    pub fn range(&self) -> &Range {
        &self.range
    }

    /// Guess budget units remaining.
    pub fn remaining_guesses(&self) -> u32 {
        self.guesses.remaining()
    }

    /// Hint budget units remaining.
    pub fn remaining_hints(&self) -> u32 {
        self.hints.remaining()
    }

    /// Processes one line of player input: either the hint command or a
    /// candidate guess.
    ///
    /// Hint requests and invalid input never cost a guess and never
    /// change the lifecycle state. A wrong guess costs one guess unit;
    /// the last wrong guess transitions to `Lost`, a correct guess to
    /// `Won`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] once the session has reached `Won` or
    /// `Lost`; budgets are left unchanged.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn submit(&mut self, raw_input: &str) -> Result<SubmitOutcome, SessionClosed> {
        if self.state != SessionState::Active {
            warn!(state = %self.state, "Submit on closed session");
            return Err(SessionClosed {
                outcome: self.state,
            });
        }

        let input = raw_input.trim();
        if input.eq_ignore_ascii_case(HINT_COMMAND) {
            return Ok(self.issue_hint());
        }

        let value = match GuessEvaluator::parse(input) {
            Ok(value) => value,
            Err(err) => {
                debug!(input, "Rejected non-numeric input");
                return Ok(SubmitOutcome::InvalidInput(err));
            }
        };

        if !GuessEvaluator::in_range(value, &self.range) {
            debug!(value, "Rejected out-of-range guess");
            return Ok(SubmitOutcome::InvalidInput(GuessError::OutOfRange {
                value,
                min: self.range.min(),
                max: self.range.max(),
            }));
        }

        Ok(self.evaluate_guess(value))
    }

    /// Delegates to the hint engine, mapping exhaustion to an outcome
    /// rather than an error: the session stays active either way.
    fn issue_hint(&mut self) -> SubmitOutcome {
        match HintEngine::next_hint(self.secret, &self.range, &mut self.hints, &mut self.rng) {
            Ok(hint) => {
                info!(
                    category = %hint.category(),
                    remaining_hints = self.hints.remaining(),
                    "Hint issued"
                );
                SubmitOutcome::HintIssued(hint)
            }
            Err(_) => {
                debug!("Hint requested with none remaining");
                SubmitOutcome::HintsExhausted
            }
        }
    }

    /// Applies an in-range guess to the session state.
    fn evaluate_guess(&mut self, value: i64) -> SubmitOutcome {
        if GuessEvaluator::matches_secret(value, self.secret) {
            info!(secret = self.secret, "Session won");
            self.state = SessionState::Won;
            return SubmitOutcome::Won {
                secret: self.secret,
            };
        }

        // Active implies guesses remain, so consumption only fails for a
        // session configured with a zero guess budget; either way a miss
        // with nothing left is a loss.
        match self.guesses.consume() {
            Ok(remaining) if remaining > 0 => {
                debug!(value, remaining, "Wrong guess");
                SubmitOutcome::WrongGuess { remaining }
            }
            _ => {
                info!(secret = self.secret, "Session lost");
                self.state = SessionState::Lost;
                SubmitOutcome::Lost {
                    secret: self.secret,
                }
            }
        }
    }
}
