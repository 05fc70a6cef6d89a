//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod fs;
pub mod medium;

pub use fs::FsDocumentStore;
pub use medium::MediumFeedClient;
