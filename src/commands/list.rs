//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::{fetch_posts, AnySource, Post};
use crate::Site;

/// List site content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    let source = AnySource::from_site(site).await;
    let posts = fetch_posts(&source).await;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", posts.len());
            for line in post_lines(&posts) {
                println!("  {}", line);
            }
        }
        "category" | "categories" => {
            let categories = category_counts(&posts);
            println!("Categories ({}):", categories.len());
            for (cat, count) in categories {
                println!("  {} ({})", cat, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}

fn post_lines(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .map(|p| format!("{} - {} [{}]", p.id, p.title, p.category_label()))
        .collect()
}

/// Post count per category, most used first
fn category_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for post in posts {
        *counts.entry(post.category_label().to_string()).or_insert(0) += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
