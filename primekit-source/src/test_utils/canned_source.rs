//! CannedSource — answers only the inputs it was given answers for.

use crate::error::FactorError;
use crate::source::FactorSource;
use std::collections::HashMap;

/// A factor source that returns a fixed sequence for each registered input
/// and [`FactorError::Unavailable`] for everything else.
///
/// The sequences are returned verbatim: they need not be prime, sorted,
/// or multiply back to the input.
///
/// ```
/// use primekit_source::FactorSource;
/// use primekit_source::test_utils::CannedSource;
///
/// let source = CannedSource::new().with(99, vec![1, 2, 3, 5, 6, 7]);
/// assert_eq!(source.factors(99).unwrap(), vec![1, 2, 3, 5, 6, 7]);
/// assert!(source.factors(100).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CannedSource {
    answers: HashMap<i64, Vec<i64>>,
}

impl CannedSource {
    /// Create a source with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the sequence to return for `n`. Replaces any earlier answer.
    #[must_use]
    pub fn with(mut self, n: i64, factors: Vec<i64>) -> Self {
        self.answers.insert(n, factors);
        self
    }
}

impl FactorSource for CannedSource {
    fn factors(&self, n: i64) -> Result<Vec<i64>, FactorError> {
        self.answers
            .get(&n)
            .cloned()
            .ok_or(FactorError::Unavailable(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_registered_answer_verbatim() {
        let source = CannedSource::new().with(99, vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(source.factors(99).unwrap(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn unknown_input_is_unavailable() {
        let source = CannedSource::new().with(99, vec![3, 3, 11]);
        let err = source.factors(98).unwrap_err();
        assert!(matches!(err, FactorError::Unavailable(98)));
    }

    #[test]
    fn later_answer_replaces_earlier() {
        let source = CannedSource::new().with(4, vec![4]).with(4, vec![2, 2]);
        assert_eq!(source.factors(4).unwrap(), vec![2, 2]);
    }

    #[test]
    fn empty_answer_is_allowed() {
        let source = CannedSource::new().with(1, vec![]);
        assert!(source.factors(1).unwrap().is_empty());
    }
}
