//!
//! Helpers shared by unit tests, integration tests and benchmarks.
//!

pub mod genesis;
