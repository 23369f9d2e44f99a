//! The factor sequence of a single input, as a serializable record.

use serde::{Deserialize, Serialize};

/// The factors produced for `n`, in the order the source produced them.
///
/// Serializes as `{"n": 12, "factors": [2, 2, 3]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Factorization {
    n: i64,
    factors: Vec<i64>,
}

impl Factorization {
    /// Pair an input with the factors a source produced for it.
    pub fn new(n: i64, factors: Vec<i64>) -> Self {
        Self { n, factors }
    }

    /// The factorized input.
    pub fn n(&self) -> i64 {
        self.n
    }

    /// The factor sequence.
    pub fn factors(&self) -> &[i64] {
        &self.factors
    }

    /// Consume the record, keeping only the factor sequence.
    pub fn into_factors(self) -> Vec<i64> {
        self.factors
    }

    /// Number of factors, counting multiplicity.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// True when there are no factors (the prime factorization of 1).
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// The largest factor, or `None` when the sequence is empty.
    ///
    /// Does not assume the sequence is sorted.
    pub fn greatest(&self) -> Option<i64> {
        self.factors.iter().copied().max()
    }

    /// Product of all factors. `Some(1)` when empty, `None` on overflow.
    pub fn product(&self) -> Option<i64> {
        self.factors
            .iter()
            .try_fold(1i64, |acc, &f| acc.checked_mul(f))
    }

    /// True when the sequence is non-decreasing.
    pub fn is_sorted(&self) -> bool {
        self.factors.is_sorted()
    }

    /// True when the factors multiply back to `n`.
    pub fn is_complete(&self) -> bool {
        self.product() == Some(self.n)
    }
}

impl From<Factorization> for Vec<i64> {
    fn from(f: Factorization) -> Self {
        f.into_factors()
    }
}
