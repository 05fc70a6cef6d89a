//! Application layer
//!
//! Selection, README patching and the update run that ties them together.

pub mod patcher;
pub mod selector;
pub mod update_service;

pub use update_service::{RunOutcome, UpdateService};
