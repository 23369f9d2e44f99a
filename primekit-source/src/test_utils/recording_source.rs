//! RecordingSource — wraps a source and records every input it was asked for.

use crate::error::FactorError;
use crate::source::FactorSource;
use std::sync::Mutex;

/// A factor source that forwards to an inner source and records each `n`.
/// Use `.calls()` to inspect what was asked.
pub struct RecordingSource<S> {
    inner: S,
    calls: Mutex<Vec<i64>>,
}

impl<S: FactorSource> RecordingSource<S> {
    /// Wrap `inner`, starting with no recorded calls.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return a snapshot of every input passed to `factors`, in call order.
    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: FactorSource> FactorSource for RecordingSource<S> {
    fn factors(&self, n: i64) -> Result<Vec<i64>, FactorError> {
        self.calls.lock().unwrap().push(n);
        self.inner.factors(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CannedSource;

    #[test]
    fn records_calls_in_order() {
        let source = RecordingSource::new(CannedSource::new().with(6, vec![2, 3]));
        assert_eq!(source.factors(6).unwrap(), vec![2, 3]);
        assert!(source.factors(7).is_err());
        assert_eq!(source.calls(), vec![6, 7]);
    }

    #[test]
    fn inner_source_is_reachable_and_unrecorded() {
        let source = RecordingSource::new(CannedSource::new().with(15, vec![3, 5]));
        assert_eq!(source.inner().factors(15).unwrap(), vec![3, 5]);
        assert!(source.calls().is_empty());
    }

    #[test]
    fn provided_factorization_is_recorded_once() {
        let source = RecordingSource::new(CannedSource::new().with(9, vec![3, 3]));
        let f = source.factorization(9).unwrap();
        assert_eq!(f.factors(), &[3, 3]);
        assert_eq!(source.calls(), vec![9]);
    }
}
