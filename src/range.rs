//! Inclusive integer range plus the derived arithmetic the hint system
//! draws from (factors and in-range multiples of the secret).

use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Inclusive integer range the secret is drawn from.
///
/// Construction enforces `min < max`, so every `Range` in circulation
/// spans at least two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    /// Creates a range with the invariant `min < max`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvertedBounds`] when `min >= max`.
    #[instrument]
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min >= max {
            return Err(RangeError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Checks whether `value` lies within the range, bounds included.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Draws a uniform value from the range, bounds included.
    #[instrument(skip(rng))]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.min..=self.max)
    }
}

/// Errors raised when constructing a range or pinning a value to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RangeError {
    /// The lower bound does not precede the upper bound.
    #[display("invalid range: min {min} must be less than max {max}")]
    InvertedBounds {
        /// Offending lower bound.
        min: i64,
        /// Offending upper bound.
        max: i64,
    },
    /// A value was required to fall inside the range and did not.
    #[display("value {value} is outside the range [{min}, {max}]")]
    OutOfBounds {
        /// The rejected value.
        value: i64,
        /// Lower bound of the range.
        min: i64,
        /// Upper bound of the range.
        max: i64,
    },
}

impl RangeError {
    /// Builds the out-of-bounds variant for `value` against `range`.
    pub(crate) fn out_of_bounds(value: i64, range: &Range) -> Self {
        Self::OutOfBounds {
            value,
            min: range.min,
            max: range.max,
        }
    }
}

/// Returns the divisors of positive `n` in ascending order.
///
/// Always contains 1 and `n` itself, so the result is never empty.
#[instrument]
pub fn factors(n: i64) -> Vec<i64> {
    // Defined for positive integers; empty otherwise.
    if n <= 0 {
        return Vec::new();
    }
    (1..=n).filter(|i| n % i == 0).collect()
}

/// Returns the multiples of positive `n` up to and including `max`,
/// ascending with step exactly `n`.
///
/// Empty when `max < n`; the single-element `[n]` when `n <= max < 2n`.
#[instrument]
pub fn multiples(n: i64, max: i64) -> Vec<i64> {
    // Defined for positive integers; empty otherwise (a non-positive
    // step would never pass the bound).
    if n <= 0 {
        return Vec::new();
    }
    (1..)
        .map(|k| n * k)
        .take_while(|m| *m <= max)
        .collect()
}
