//! Guess validation and checking.

use crate::range::Range;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Stateless evaluator for candidate guesses.
///
/// Pure functions only; the session composes them into the guess path of
/// its turn loop.
#[derive(Debug, Clone, Copy)]
pub struct GuessEvaluator;

impl GuessEvaluator {
    /// Parses trimmed input as a signed integer guess.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NotANumber`] for non-numeric input.
    #[instrument]
    pub fn parse(input: &str) -> Result<i64, GuessError> {
        let trimmed = input.trim();
        trimmed.parse().map_err(|_| GuessError::NotANumber {
            input: trimmed.to_string(),
        })
    }

    /// Checks whether `value` falls within the configured range.
    pub fn in_range(value: i64, range: &Range) -> bool {
        range.contains(value)
    }

    /// Checks whether `value` equals the secret.
    pub fn matches_secret(value: i64, secret: i64) -> bool {
        value == secret
    }
}

/// Reasons a submitted guess is rejected without costing a guess unit.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum GuessError {
    /// The input did not parse as an integer.
    #[display("'{input}' is not a number")]
    NotANumber {
        /// The rejected input, trimmed.
        input: String,
    },
    /// The guess parsed but lies outside the configured range.
    #[display("{value} is outside the range [{min}, {max}]")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Lower bound of the playable range.
        min: i64,
        /// Upper bound of the playable range.
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_padded_integers() {
        assert_eq!(GuessEvaluator::parse("  42 "), Ok(42));
        assert_eq!(GuessEvaluator::parse("-7"), Ok(-7));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            GuessEvaluator::parse("abc"),
            Err(GuessError::NotANumber { .. })
        ));
        assert!(matches!(
            GuessEvaluator::parse(""),
            Err(GuessError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_checks_are_idempotent() {
        let range = Range::new(1, 100).unwrap();
        for _ in 0..3 {
            assert!(GuessEvaluator::in_range(42, &range));
            assert!(!GuessEvaluator::in_range(101, &range));
            assert!(GuessEvaluator::matches_secret(42, 42));
            assert!(!GuessEvaluator::matches_secret(41, 42));
        }
    }
}
