//! Testing support
//!
//! Deterministic data builders shared by the unit tests.

pub mod generators;

pub use generators::TestDataGenerator;
