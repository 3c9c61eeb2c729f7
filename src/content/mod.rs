//! Content module - blog posts and the sources they come from

mod post;
pub mod source;

pub use post::{Post, PostId, DEFAULT_AUTHOR_ROLE, DEFAULT_CATEGORY};
pub use source::{fetch_posts, AnySource, FileSource, HttpSource, InMemorySource, PostSource};
