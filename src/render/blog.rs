//! Blog renderer - listing cards and single-article views

use crate::config::SiteConfig;
use crate::content::{fetch_posts, Post, PostId, PostSource};
use crate::helpers::{article_href, avatar_fallback_url, html_escape, image_tag};

use super::Document;

/// Container holding the listing cards
pub const POSTS_GRID_ID: &str = "posts-grid";

/// Container holding a single article
pub const ARTICLE_CONTAINER_ID: &str = "article-container";

const EMPTY_LISTING: &str = r#"<p style="grid-column: 1/-1; text-align: center;">No hay artículos disponibles por el momento.</p>"#;

/// Renders posts from a source into page documents
///
/// Every call fetches the posts again and overwrites the target container,
/// so rendering twice into the same document leaves only the second result.
pub struct BlogRenderer<'a, S> {
    config: &'a SiteConfig,
    source: &'a S,
}

impl<'a, S: PostSource> BlogRenderer<'a, S> {
    pub fn new(config: &'a SiteConfig, source: &'a S) -> Self {
        Self { config, source }
    }

    /// Render the listing into the `posts-grid` container
    ///
    /// Pages without that container are left untouched.
    pub async fn load_blog_posts(&self, doc: &mut Document) {
        if !doc.has_container(POSTS_GRID_ID) {
            return;
        }

        let posts = fetch_posts(self.source).await;

        let html = if posts.is_empty() {
            EMPTY_LISTING.to_string()
        } else {
            posts
                .iter()
                .map(|post| self.blog_card(post))
                .collect::<Vec<_>>()
                .join("")
        };

        doc.set_inner_html(POSTS_GRID_ID, html);
    }

    /// Render one article into the `article-container` container
    ///
    /// Unknown ids render a not-found panel instead.
    pub async fn load_article(&self, doc: &mut Document, article_id: &PostId) {
        if !doc.has_container(ARTICLE_CONTAINER_ID) {
            return;
        }

        let posts = fetch_posts(self.source).await;

        let html = match Post::find(&posts, article_id) {
            Some(post) => {
                doc.set_title(format!("{} - {}", post.title, self.config.title));
                self.article_view(post)
            }
            None => {
                tracing::debug!("No post with id {}", article_id);
                self.not_found()
            }
        };

        doc.set_inner_html(ARTICLE_CONTAINER_ID, html);
    }

    fn blog_card(&self, post: &Post) -> String {
        let href = article_href(self.config, &post.id);
        format!(
            r#"
        <article class="blog-card" onclick="window.location.href='{href}'" style="cursor: pointer;">
            {image}
            <div class="post-content">
                <span class="post-category">{category}</span>
                <h3 class="post-title">{title}</h3>
                <p class="post-excerpt">{excerpt}</p>
                <a href="{href}" class="read-more">Leer más &rarr;</a>
            </div>
        </article>
    "#,
            href = href,
            image = image_tag(&post.image, &post.title, "post-image", ""),
            category = html_escape(post.category_label()),
            title = html_escape(&post.title),
            excerpt = html_escape(&post.description),
        )
    }

    fn article_view(&self, post: &Post) -> String {
        let subtitle = post
            .subtitle_text()
            .map(|s| format!(r#"<h2 class="article-subtitle">{}</h2>"#, html_escape(s)))
            .unwrap_or_default();

        let avatar_src = post
            .author_image_src()
            .unwrap_or(&self.config.default_avatar);
        let fallback = format!(
            r#" onerror="this.onerror=null;this.src='{}'""#,
            html_escape(&avatar_fallback_url(self.config, &post.author))
        );

        format!(
            r#"
        <header class="article-header">
            {cover}

            <h1 class="article-title">{title}</h1>
            {subtitle}

            <div class="author-profile">
                {avatar}
                <div class="author-info">
                    <span class="author-name">{author}</span>
                    <span class="author-role">{role}</span>
                    <span class="article-meta">Publicado el {date} • 5 min de lectura</span>
                </div>
            </div>
        </header>

        <div class="article-content">
            {content}
        </div>

        <div style="margin-top: 4rem; text-align: center;">
            <p>¿Te gustó este artículo? Compartilo.</p>
            <a href="{blog}" class="back-link">&larr; Volver a todos los artículos</a>
        </div>
    "#,
            cover = image_tag(&post.image, &post.title, "article-cover-image", ""),
            title = html_escape(&post.title),
            subtitle = subtitle,
            avatar = image_tag(avatar_src, &post.author, "author-avatar", &fallback),
            author = html_escape(&post.author),
            role = html_escape(post.author_role_label()),
            date = html_escape(&post.date),
            content = post.content,
            blog = self.config.blog_page,
        )
    }

    fn not_found(&self) -> String {
        format!(
            r#"
            <div style="text-align: center; padding: 4rem;">
                <h2>Artículo no encontrado</h2>
                <p>El artículo que buscas no existe o ha sido movido.</p>
                <a href="{}" class="cta-button">Volver al Blog</a>
            </div>
        "#,
            self.config.blog_page
        )
    }
}
