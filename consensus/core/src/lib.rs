pub mod config;
pub mod hashing;
pub mod header;
pub mod network;
pub mod script;
#[cfg(any(test, feature = "test-utils"))]
pub mod testutils;
pub mod tx;
