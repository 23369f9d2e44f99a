//! # primekit-source — the factor source capability
//!
//! This crate defines the one boundary the rest of primekit composes over:
//! something that, given an integer, produces its factor sequence.
//!
//! | Item | What it does |
//! |------|-------------|
//! | [`FactorSource`] | Produce the factors of `n` |
//! | [`Factorization`] | Serializable `{ n, factors }` record with checks |
//! | [`FactorError`] | Every failure a source or consumer can surface |
//!
//! ## Design Principle
//!
//! [`FactorSource::factors`] means "give me the factors of `n`", not
//! "run trial division". A real algorithm, a lookup table and a test
//! double all implement the same trait, so consumers such as the
//! greatest-factor extractor never depend on a particular algorithm.
//!
//! The trait is synchronous: every operation here is a pure function with
//! no I/O, so there is nothing to await.

#![deny(missing_docs)]

pub mod error;
pub mod factorization;
pub mod source;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use error::FactorError;
pub use factorization::Factorization;
pub use source::FactorSource;
