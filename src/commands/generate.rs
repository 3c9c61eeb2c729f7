//! Generate the static blog listing

use anyhow::Result;
use std::fs;

use crate::content::{fetch_posts, AnySource, InMemorySource};
use crate::render::render_blog_page;
use crate::Site;

/// Render the listing page and snapshot the posts into the public directory
///
/// The snapshot lets a static deployment serve `data/posts.json` next to the
/// generated pages. Article pages are rendered on request by the server.
pub async fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let source = AnySource::from_site(site).await;
    let posts = fetch_posts(&source).await;
    tracing::info!("Loaded {} posts", posts.len());

    let data_path = site.public_dir.join(&site.config.data_file);
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&data_path, serde_json::to_string_pretty(&posts)?)?;
    tracing::debug!("Wrote {:?}", data_path);

    let html = render_blog_page(&site.config, &InMemorySource::new(posts)).await;
    let blog_path = site.public_dir.join(&site.config.blog_page);
    fs::write(&blog_path, html)?;
    tracing::debug!("Wrote {:?}", blog_path);

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_generate() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(
            dir.path().join("data/posts.json"),
            r#"[{"id": 1, "title": "Uno"}, {"id": 2, "title": "Dos"}]"#,
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();

        run(&site).await.unwrap();

        let blog = fs::read_to_string(site.public_dir.join("blog.html")).unwrap();
        assert_eq!(blog.matches(r#"class="blog-card""#).count(), 2);

        let snapshot = fs::read_to_string(site.public_dir.join("data/posts.json")).unwrap();
        let posts: Vec<Post> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "Dos");
    }

    #[tokio::test]
    async fn test_generate_without_data() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        run(&site).await.unwrap();

        let blog = fs::read_to_string(site.public_dir.join("blog.html")).unwrap();
        assert!(blog.contains("No hay artículos disponibles por el momento."));
    }
}
