//! Hint generation for the secret number.
//!
//! Hints are produced as structured [`HintFact`]s before being rendered to
//! text, so the category selection and its fallback policy can be tested
//! independently of the random source.

use crate::budget::{Budget, ExhaustedBudget};
use crate::range::{self, Range};
use derive_more::Display;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Category of an issued hint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum HintCategory {
    /// Reveals a nontrivial divisor of the secret.
    Divisibility,
    /// Reveals an in-range multiple of the secret.
    Multiple,
    /// Bounds the secret from one side.
    Comparison,
    /// Reveals whether the secret is even or odd.
    Parity,
    /// Reveals the secret outright (only constructible for secret 1).
    Degenerate,
}

/// Structured payload of a hint, rendered to player-facing text via
/// `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum HintFact {
    /// The secret is divisible by the carried value.
    #[display("The number is divisible by {_0}.")]
    DivisibleBy(i64),
    /// The carried value is a multiple of the secret.
    #[display("{_0} is a multiple of the number.")]
    HasMultiple(i64),
    /// The secret is strictly larger than the carried bound.
    #[display("The number is larger than {_0}.")]
    LargerThan(i64),
    /// The secret is strictly smaller than the carried bound.
    #[display("The number is smaller than {_0}.")]
    SmallerThan(i64),
    /// The secret is even.
    #[display("The number is even.")]
    Even,
    /// The secret is odd.
    #[display("The number is odd.")]
    Odd,
    /// The secret is the carried value.
    #[display("The number is {_0}!")]
    Reveal(i64),
    /// The secret sits at the boundary of the range.
    #[display("The number is at the boundary of the range!")]
    AtBoundary,
}

impl HintFact {
    /// Maps the fact to its hint category.
    pub fn category(&self) -> HintCategory {
        match self {
            HintFact::DivisibleBy(_) => HintCategory::Divisibility,
            HintFact::HasMultiple(_) => HintCategory::Multiple,
            HintFact::LargerThan(_) | HintFact::SmallerThan(_) | HintFact::AtBoundary => {
                HintCategory::Comparison
            }
            HintFact::Even | HintFact::Odd => HintCategory::Parity,
            HintFact::Reveal(_) => HintCategory::Degenerate,
        }
    }
}

/// A single issued hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    fact: HintFact,
}

impl Hint {
    /// Wraps a fact as an issued hint.
    pub fn new(fact: HintFact) -> Self {
        Self { fact }
    }

    /// The structured fact behind the hint.
    pub fn fact(&self) -> HintFact {
        self.fact
    }

    /// The hint's category.
    pub fn category(&self) -> HintCategory {
        self.fact.category()
    }

    /// Player-facing hint text.
    pub fn text(&self) -> String {
        self.fact.to_string()
    }
}

/// The three buckets the engine draws a category from. Divisibility and
/// multiple hints share a bucket and split on availability afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    DivisibilityOrMultiple,
    Comparison,
    Parity,
}

const BUCKETS: [Bucket; 3] = [
    Bucket::DivisibilityOrMultiple,
    Bucket::Comparison,
    Bucket::Parity,
];

/// Stateful hint dispenser.
///
/// Holds no data of its own; the session lends it the secret, the range,
/// and the hints budget for the duration of each call.
#[derive(Debug, Clone, Copy)]
pub struct HintEngine;

impl HintEngine {
    /// Produces the next hint about `secret`, consuming one hint budget
    /// unit.
    ///
    /// Every returned hint costs exactly one unit, even when the chosen
    /// category degrades to a trivial fact. The budget decrement is the
    /// only side effect.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedBudget`] when the hints budget is zero; the
    /// budget is left untouched.
    #[instrument(skip(rng))]
    pub fn next_hint<R: Rng>(
        secret: i64,
        range: &Range,
        budget: &mut Budget,
        rng: &mut R,
    ) -> Result<Hint, ExhaustedBudget> {
        budget.consume()?;

        let bucket = *BUCKETS
            .choose(rng)
            .unwrap_or(&Bucket::Parity);
        debug!(?bucket, remaining_hints = budget.remaining(), "Hint bucket chosen");

        let fact = match bucket {
            Bucket::DivisibilityOrMultiple => Self::divisibility_fact(secret, range, rng),
            Bucket::Comparison => Self::comparison_fact(secret, range, rng),
            Bucket::Parity => Self::parity_fact(secret),
        };

        Ok(Hint::new(fact))
    }

    /// Divisibility-or-multiple bucket with availability fallback.
    ///
    /// Usable factors exclude 1 and the secret itself; usable multiples
    /// exclude the secret itself. Both available picks a kind uniformly,
    /// one available uses that kind, neither (secret == 1) reveals the
    /// secret outright.
    fn divisibility_fact<R: Rng>(secret: i64, range: &Range, rng: &mut R) -> HintFact {
        let factors = range::factors(secret);
        let multiples = range::multiples(secret, range.max());

        let usable_factors: Vec<i64> = factors
            .iter()
            .copied()
            .filter(|f| *f != 1 && *f != secret)
            .collect();
        let usable_multiples = multiples.get(1..).unwrap_or(&[]);

        let use_factors = match (!usable_factors.is_empty(), !usable_multiples.is_empty()) {
            (true, true) => *[true, false].choose(rng).unwrap_or(&true),
            (true, false) => true,
            (false, true) => false,
            (false, false) => return HintFact::Reveal(secret),
        };

        if use_factors {
            // Fall back to the full factor list when only trivial
            // divisors exist, degenerately revealing 1 or the secret.
            let pool = if usable_factors.is_empty() {
                &factors
            } else {
                &usable_factors
            };
            match pool.choose(rng) {
                Some(f) => HintFact::DivisibleBy(*f),
                None => HintFact::Reveal(secret),
            }
        } else {
            match usable_multiples.choose(rng) {
                Some(m) => HintFact::HasMultiple(*m),
                None => HintFact::Reveal(secret),
            }
        }
    }

    /// Comparison bucket: bound the secret from a uniformly chosen side.
    fn comparison_fact<R: Rng>(secret: i64, range: &Range, rng: &mut R) -> HintFact {
        let mut directions = Vec::with_capacity(2);
        if secret > range.min() {
            directions.push(Direction::Smaller);
        }
        if secret < range.max() {
            directions.push(Direction::Larger);
        }

        match directions.choose(rng).copied() {
            Some(Direction::Smaller) => {
                let bound = rng.random_range(range.min()..=secret - 1);
                HintFact::LargerThan(bound)
            }
            Some(Direction::Larger) => {
                let bound = rng.random_range(secret + 1..=range.max());
                HintFact::SmallerThan(bound)
            }
            // Secret at both boundaries, excluded by the min < max
            // invariant but kept total.
            None => HintFact::AtBoundary,
        }
    }

    /// Parity bucket.
    fn parity_fact(secret: i64) -> HintFact {
        if secret % 2 == 0 {
            HintFact::Even
        } else {
            HintFact::Odd
        }
    }
}

/// Side of the range a comparison hint reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Smaller,
    Larger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_rendering() {
        assert_eq!(
            HintFact::DivisibleBy(6).to_string(),
            "The number is divisible by 6."
        );
        assert_eq!(
            HintFact::HasMultiple(84).to_string(),
            "84 is a multiple of the number."
        );
        assert_eq!(
            HintFact::LargerThan(10).to_string(),
            "The number is larger than 10."
        );
        assert_eq!(
            HintFact::SmallerThan(90).to_string(),
            "The number is smaller than 90."
        );
        assert_eq!(HintFact::Even.to_string(), "The number is even.");
        assert_eq!(HintFact::Reveal(1).to_string(), "The number is 1!");
    }

    #[test]
    fn test_fact_category_mapping() {
        assert_eq!(HintFact::DivisibleBy(6).category(), HintCategory::Divisibility);
        assert_eq!(HintFact::HasMultiple(84).category(), HintCategory::Multiple);
        assert_eq!(HintFact::LargerThan(10).category(), HintCategory::Comparison);
        assert_eq!(HintFact::SmallerThan(90).category(), HintCategory::Comparison);
        assert_eq!(HintFact::AtBoundary.category(), HintCategory::Comparison);
        assert_eq!(HintFact::Odd.category(), HintCategory::Parity);
        assert_eq!(HintFact::Reveal(1).category(), HintCategory::Degenerate);
    }

    #[test]
    fn test_parity_fact() {
        assert_eq!(HintEngine::parity_fact(42), HintFact::Even);
        assert_eq!(HintEngine::parity_fact(13), HintFact::Odd);
    }
}
