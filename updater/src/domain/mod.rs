//! Domain layer
//!
//! - `post`: the feed entry model
//! - `ports`: traits for the feed source and the README store

pub mod ports;
pub mod post;

pub use post::{dedupe_by_link, Post};
