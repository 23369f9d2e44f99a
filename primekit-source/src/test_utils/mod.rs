//! Substitutable factor sources for testing.
//!
//! Available behind the `test-utils` feature flag. These stand in for a
//! real algorithm so consumers can be tested on their own.

mod canned_source;
mod recording_source;

pub use canned_source::CannedSource;
pub use recording_source::RecordingSource;
