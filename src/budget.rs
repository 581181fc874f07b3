//! Decrementing counters limiting guesses and hints.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A non-negative counter consumed one unit at a time.
///
/// Reaching zero is terminal for the resource the budget guards: further
/// consumption fails with [`ExhaustedBudget`] and leaves the counter at
/// zero. The count never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    remaining: u32,
}

impl Budget {
    /// Creates a budget with `limit` units available.
    #[instrument]
    pub fn new(limit: u32) -> Self {
        Self { remaining: limit }
    }

    /// Units left to consume.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the budget has reached zero.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes one unit, returning the count left afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedBudget`] when no units remain; the counter is
    /// left untouched.
    #[instrument]
    pub fn consume(&mut self) -> Result<u32, ExhaustedBudget> {
        if self.remaining == 0 {
            return Err(ExhaustedBudget);
        }
        self.remaining -= 1;
        debug!(remaining = self.remaining, "Budget unit consumed");
        Ok(self.remaining)
    }
}

/// Consumption was attempted on a budget with zero units remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("budget exhausted")]
pub struct ExhaustedBudget;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_counts_down() {
        let mut budget = Budget::new(2);
        assert_eq!(budget.consume(), Ok(1));
        assert_eq!(budget.consume(), Ok(0));
        assert!(budget.is_exhausted());
    }

    #[test]
    fn test_consume_at_zero_fails_without_change() {
        let mut budget = Budget::new(0);
        assert_eq!(budget.consume(), Err(ExhaustedBudget));
        assert_eq!(budget.remaining(), 0);
    }
}
