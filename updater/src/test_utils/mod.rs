//! Test utilities
//!
//! Hand-written in-memory ports and fixture builders for unit tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
