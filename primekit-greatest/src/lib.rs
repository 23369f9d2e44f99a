#![deny(missing_docs)]
//! Greatest factor extraction.
//!
//! [`GreatestFactor`] asks an injected [`FactorSource`] for the factors of
//! `n` and returns the largest one. It has no algorithm of its own, so any
//! source works: trial division in production, a canned source in tests.
//!
//! When the source returns no factors (the factorization of 1), the
//! [`EmptyPolicy`] decides the outcome. The default is to fail with
//! [`FactorError::UndefinedMaximum`].

use primekit_source::{FactorError, FactorSource};

/// What to return when the source produces an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Fail with [`FactorError::UndefinedMaximum`].
    #[default]
    Error,
    /// Return 1, the value of the empty product.
    One,
}

/// Extracts the greatest factor from whatever a [`FactorSource`] produces.
///
/// Generic over `S: FactorSource`; pass `Box<dyn FactorSource>` or
/// `Arc<dyn FactorSource>` to choose the source at runtime.
///
/// ```
/// use primekit_greatest::{EmptyPolicy, GreatestFactor};
/// use primekit_trial::TrialDivision;
///
/// let greatest = GreatestFactor::new(TrialDivision);
/// assert_eq!(greatest.greatest_factor(13195).unwrap(), 29);
///
/// let lenient = GreatestFactor::new(TrialDivision).empty_policy(EmptyPolicy::One);
/// assert_eq!(lenient.greatest_factor(1).unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreatestFactor<S: FactorSource> {
    source: S,
    policy: EmptyPolicy,
}

impl<S: FactorSource> GreatestFactor<S> {
    /// Create an extractor over `source` with [`EmptyPolicy::Error`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: EmptyPolicy::default(),
        }
    }

    /// Override what an empty factor sequence yields.
    #[must_use]
    pub fn empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The injected source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The active empty-sequence policy.
    pub fn policy(&self) -> EmptyPolicy {
        self.policy
    }

    /// The largest element of the source's factors for `n`.
    ///
    /// Calls the source exactly once. Source errors are returned unchanged.
    /// The sequence is not assumed to be sorted.
    pub fn greatest_factor(&self, n: i64) -> Result<i64, FactorError> {
        let factors = self.source.factors(n)?;
        match factors.into_iter().max() {
            Some(greatest) => {
                tracing::debug!(n, greatest, "resolved greatest factor");
                Ok(greatest)
            }
            None => {
                tracing::debug!(n, policy = ?self.policy, "source produced no factors");
                match self.policy {
                    EmptyPolicy::Error => Err(FactorError::UndefinedMaximum(n)),
                    EmptyPolicy::One => Ok(1),
                }
            }
        }
    }
}

/// The greatest factor of `n` from `source`, failing on an empty sequence.
pub fn greatest_factor<S: FactorSource + ?Sized>(source: &S, n: i64) -> Result<i64, FactorError> {
    GreatestFactor::new(source).greatest_factor(n)
}
