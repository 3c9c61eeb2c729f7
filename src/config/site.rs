//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // URL
    pub url: String,

    // Directory
    pub public_dir: String,
    pub data_file: String,

    // Pages
    pub blog_page: String,
    pub article_page: String,

    // Authors
    pub default_avatar: String,
    pub avatar_service: String,

    // Posts
    pub posts_source: SourceKind,
    /// Base URL for the `http` source; falls back to `url` when unset
    pub posts_url: Option<String>,

    #[serde(default)]
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "LOOM.IA".to_string(),

            url: "http://localhost:4000".to_string(),

            public_dir: "public".to_string(),
            data_file: "data/posts.json".to_string(),

            blog_page: "blog.html".to_string(),
            article_page: "article.html".to_string(),

            default_avatar: "assets/img/default-avatar.png".to_string(),
            avatar_service: "https://ui-avatars.com/api/".to_string(),

            posts_source: SourceKind::File,
            posts_url: None,

            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Base URL the `http` post source fetches `data_file` against
    pub fn posts_base_url(&self) -> &str {
        self.posts_url.as_deref().unwrap_or(&self.url)
    }
}

/// Where the blog posts come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Read `data_file` from the site directory on every render
    #[default]
    File,
    /// GET `data_file` relative to `posts_url`
    Http,
    /// Load `data_file` once at startup and serve it from memory
    Memory,
}

/// Contact form relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.web3forms.com/submit".to_string(),
            access_key: String::new(),
            subject: "Nueva consulta desde LOOM.IA".to_string(),
            from_name: "LOOM.IA Web".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "LOOM.IA");
        assert_eq!(config.data_file, "data/posts.json");
        assert_eq!(config.posts_source, SourceKind::File);
        assert_eq!(config.posts_base_url(), "http://localhost:4000");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Mi Sitio
posts_source: http
posts_url: https://cdn.example.com/site
contact:
  access_key: abc123
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Mi Sitio");
        assert_eq!(config.posts_source, SourceKind::Http);
        assert_eq!(config.posts_base_url(), "https://cdn.example.com/site");
        assert_eq!(config.contact.access_key, "abc123");
        assert_eq!(config.contact.endpoint, "https://api.web3forms.com/submit");
        assert_eq!(config.blog_page, "blog.html");
    }

    #[test]
    fn test_ignores_unknown_keys() {
        let yaml = "title: Mi Sitio\nlanguage: es\nroot: /blog/\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Mi Sitio");
    }
}
