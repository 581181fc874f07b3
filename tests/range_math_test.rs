//! Tests for factor and multiple computation.

use strictly_guesser::{factors, multiples};

#[test]
fn test_factors_sorted_and_complete() {
    for n in 1..=200i64 {
        let divisors = factors(n);
        assert_eq!(divisors.first(), Some(&1), "first divisor of {} must be 1", n);
        assert_eq!(divisors.last(), Some(&n), "last divisor of {} must be {}", n, n);
        assert!(
            divisors.windows(2).all(|w| w[0] < w[1]),
            "divisors of {} must be strictly ascending",
            n
        );
        for d in 1..=n {
            assert_eq!(
                divisors.contains(&d),
                n % d == 0,
                "divisor list of {} disagrees on {}",
                n,
                d
            );
        }
    }
}

#[test]
fn test_factors_of_perfect_square() {
    // 36 has a repeated prime factor; each divisor appears once.
    assert_eq!(factors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
}

#[test]
fn test_multiples_step_and_bounds() {
    for n in 1..=50i64 {
        let max = 100;
        let result = multiples(n, max);
        assert_eq!(result.first(), Some(&n), "first multiple must be {}", n);
        assert!(
            result.iter().all(|m| *m <= max),
            "multiples of {} must stay within {}",
            n,
            max
        );
        assert!(
            result.windows(2).all(|w| w[1] - w[0] == n),
            "multiples of {} must step by {}",
            n,
            n
        );
        assert_eq!(result.len() as i64, max / n, "count of multiples of {}", n);
    }
}

#[test]
fn test_multiples_degenerate_bounds() {
    // max below n yields nothing; max equal to n yields just n.
    assert!(multiples(101, 100).is_empty());
    assert_eq!(multiples(100, 100), vec![100]);
    assert_eq!(multiples(51, 100), vec![51]);
}
