#![deny(missing_docs)]
//! Prime factorization by trial division.
//!
//! [`TrialDivision`] implements [`FactorSource`] and returns the prime
//! factors of `n` smallest first, repeated by multiplicity. Inputs below 1
//! are rejected with [`FactorError::InvalidInput`].

use primekit_source::{FactorError, FactorSource};

/// Factor source that divides out each candidate from 2 upward.
///
/// Stateless. Worst case is O(√n) divisions, reached when `n` is prime.
///
/// ```
/// use primekit_source::FactorSource;
/// use primekit_trial::TrialDivision;
///
/// assert_eq!(TrialDivision.factors(13195).unwrap(), vec![5, 7, 13, 29]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialDivision;

impl TrialDivision {
    /// Create a trial division source.
    pub fn new() -> Self {
        Self
    }
}

impl FactorSource for TrialDivision {
    fn factors(&self, n: i64) -> Result<Vec<i64>, FactorError> {
        factorize(n)
    }
}

/// The prime factors of `n`, non-decreasing. `1` yields an empty sequence.
///
/// Composite candidates never divide the remainder: their prime factors
/// were divided out when smaller candidates were tried.
pub fn factorize(n: i64) -> Result<Vec<i64>, FactorError> {
    if n <= 0 {
        tracing::debug!(n, "rejecting non-positive input");
        return Err(FactorError::InvalidInput(n));
    }

    let mut remaining = n;
    let mut factors = Vec::new();
    let mut candidate = 2i64;

    // candidate * candidate <= remaining, without overflow
    while candidate <= remaining / candidate {
        while remaining % candidate == 0 {
            factors.push(candidate);
            remaining /= candidate;
        }
        candidate += 1;
    }
    // No divisor up to √remaining, so what is left is prime.
    if remaining > 1 {
        factors.push(remaining);
    }

    tracing::debug!(n, factors = factors.len(), "factorized by trial division");
    Ok(factors)
}
