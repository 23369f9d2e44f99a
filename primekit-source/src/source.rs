//! The factor source trait.

use crate::error::FactorError;
use crate::factorization::Factorization;
use std::sync::Arc;

/// Produce the factor sequence of an integer.
///
/// Implementations decide the algorithm (or lack of one): trial division,
/// a precomputed table, or a test double that returns canned answers.
/// Consumers depend only on this trait.
pub trait FactorSource: Send + Sync {
    /// The factors of `n`.
    fn factors(&self, n: i64) -> Result<Vec<i64>, FactorError>;

    /// The factors of `n`, paired with `n`.
    fn factorization(&self, n: i64) -> Result<Factorization, FactorError> {
        self.factors(n).map(|factors| Factorization::new(n, factors))
    }
}

impl<T: FactorSource + ?Sized> FactorSource for &T {
    fn factors(&self, n: i64) -> Result<Vec<i64>, FactorError> {
        (**self).factors(n)
    }
}

impl<T: FactorSource + ?Sized> FactorSource for Box<T> {
    fn factors(&self, n: i64) -> Result<Vec<i64>, FactorError> {
        (**self).factors(n)
    }
}

impl<T: FactorSource + ?Sized> FactorSource for Arc<T> {
    fn factors(&self, n: i64) -> Result<Vec<i64>, FactorError> {
        (**self).factors(n)
    }
}
