//! Feed module
//!
//! RSS parsing and README card rendering.

pub mod parser;
pub mod renderer;

pub use parser::parse_posts;
pub use renderer::make_post_block;
