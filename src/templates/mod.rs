//! Built-in page layouts
//!
//! Layouts are embedded in the binary. Each one has a `{{ title }}` slot and
//! one slot per container of its page document.

use crate::config::SiteConfig;
use crate::render::{Document, ARTICLE_CONTAINER_ID, POSTS_GRID_ID};

/// Layout of the blog listing page
pub const BLOG_LAYOUT: &str = include_str!("layouts/blog.html");

/// Layout of the single-article page
pub const ARTICLE_LAYOUT: &str = include_str!("layouts/article.html");

/// Empty document for the blog listing page
pub fn blog_document(config: &SiteConfig) -> Document {
    Document::new(format!("Blog - {}", config.title)).with_container(POSTS_GRID_ID)
}

/// Empty document for the article page
pub fn article_document(config: &SiteConfig) -> Document {
    Document::new(format!("Artículo - {}", config.title)).with_container(ARTICLE_CONTAINER_ID)
}
