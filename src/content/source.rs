//! Post sources - resolve the list of posts from memory, disk, or HTTP

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use super::Post;
use crate::config::SourceKind;
use crate::Site;

/// Errors raised while fetching posts
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No se pudo cargar los datos del blog (status {0})")]
    Status(u16),

    #[error("Invalid posts data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Something that can produce the post collection
pub trait PostSource {
    /// Fetch every post, in source order
    fn fetch(&self) -> impl Future<Output = Result<Vec<Post>, SourceError>> + Send;
}

/// Fetch posts, degrading any failure to an empty list
///
/// Errors are logged and never reach the caller.
pub async fn fetch_posts<S: PostSource>(source: &S) -> Vec<Post> {
    match source.fetch().await {
        Ok(posts) => {
            tracing::debug!("Fetched {} posts", posts.len());
            posts
        }
        Err(e) => {
            tracing::error!("Error fetching posts: {}", e);
            Vec::new()
        }
    }
}

/// Posts preloaded into memory
#[derive(Debug, Clone)]
pub struct InMemorySource {
    posts: Arc<[Post]>,
}

impl InMemorySource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: posts.into(),
        }
    }
}

impl PostSource for InMemorySource {
    async fn fetch(&self) -> Result<Vec<Post>, SourceError> {
        Ok(self.posts.to_vec())
    }
}

/// Posts read from a JSON file on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Post>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Posts fetched with a single GET request
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a source fetching `data_file` relative to `base_url`
    pub fn new(base_url: &str, data_file: &str) -> Self {
        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            data_file.trim_start_matches('/')
        );
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PostSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Post>, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// The source selected for a site at startup
#[derive(Debug, Clone)]
pub enum AnySource {
    Memory(InMemorySource),
    File(FileSource),
    Http(HttpSource),
}

impl AnySource {
    /// Build the source configured in `_config.yml`
    ///
    /// The memory source reads the data file once here; a missing or broken
    /// file leaves it empty.
    pub async fn from_site(site: &Site) -> Self {
        let data_path = site.base_dir.join(&site.config.data_file);
        match site.config.posts_source {
            SourceKind::File => AnySource::File(FileSource::new(data_path)),
            SourceKind::Http => AnySource::Http(HttpSource::new(
                site.config.posts_base_url(),
                &site.config.data_file,
            )),
            SourceKind::Memory => {
                let posts = fetch_posts(&FileSource::new(&data_path)).await;
                tracing::info!("Loaded {} posts into memory from {:?}", posts.len(), data_path);
                AnySource::Memory(InMemorySource::new(posts))
            }
        }
    }
}

impl PostSource for AnySource {
    async fn fetch(&self) -> Result<Vec<Post>, SourceError> {
        match self {
            AnySource::Memory(source) => source.fetch().await,
            AnySource::File(source) => source.fetch().await,
            AnySource::Http(source) => source.fetch().await,
        }
    }
}
