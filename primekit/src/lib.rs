#![deny(missing_docs)]
//! # primekit — umbrella crate
//!
//! Single import surface for primekit. Re-exports the factor source
//! protocol and its implementations behind feature flags, plus a
//! `prelude` for the happy path.
//!
//! ```
//! use primekit::prelude::*;
//!
//! assert_eq!(TrialDivision.factors(8).unwrap(), vec![2, 2, 2]);
//! assert_eq!(GreatestFactor::new(TrialDivision).greatest_factor(9).unwrap(), 3);
//! ```

pub use primekit_source;
#[cfg(feature = "greatest")]
pub use primekit_greatest;
#[cfg(feature = "trial")]
pub use primekit_trial;

/// Happy-path imports.
pub mod prelude {
    pub use primekit_source::{FactorError, FactorSource, Factorization};

    #[cfg(feature = "trial")]
    pub use primekit_trial::{TrialDivision, factorize};

    #[cfg(feature = "greatest")]
    pub use primekit_greatest::{EmptyPolicy, GreatestFactor, greatest_factor};

    #[cfg(feature = "test-utils")]
    pub use primekit_source::test_utils::{CannedSource, RecordingSource};
}
