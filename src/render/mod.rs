//! Rendering - page documents and the blog renderer

mod blog;
mod document;

pub use blog::{BlogRenderer, ARTICLE_CONTAINER_ID, POSTS_GRID_ID};
pub use document::Document;

use crate::config::SiteConfig;
use crate::content::{PostId, PostSource};
use crate::templates;

/// Render the complete blog listing page
pub async fn render_blog_page<S: PostSource>(config: &SiteConfig, source: &S) -> String {
    let mut doc = templates::blog_document(config);
    BlogRenderer::new(config, source)
        .load_blog_posts(&mut doc)
        .await;
    doc.render(templates::BLOG_LAYOUT)
}

/// Render the complete article page for `id`
pub async fn render_article_page<S: PostSource>(
    config: &SiteConfig,
    source: &S,
    id: &PostId,
) -> String {
    let mut doc = templates::article_document(config);
    BlogRenderer::new(config, source)
        .load_article(&mut doc, id)
        .await;
    doc.render(templates::ARTICLE_LAYOUT)
}
