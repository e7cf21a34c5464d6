//! Live post source backed by an HTTP endpoint

use crate::core::{PostviewError, PostviewResult};
use crate::di::traits::{ConfigProvider, PostSource};
use crate::posts::types::Post;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use std::time::Duration;

/// Fetches posts with a single GET to a fixed URL
pub struct LivePostSource {
    http_client: HttpClient,
    url: String,
}

impl LivePostSource {
    /// Create a live source for `url` with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> PostviewResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("postview/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PostviewError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    /// Create a live source from configuration
    pub fn from_config(config: &dyn ConfigProvider) -> PostviewResult<Self> {
        Self::new(config.posts_url(), config.request_timeout())
    }

    /// The URL this source fetches from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the post list
    pub async fn fetch_posts(&self) -> PostviewResult<Vec<Post>> {
        tracing::debug!(url = %self.url, "fetching posts");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(PostviewError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostviewError::Fetch(format!("HTTP {}", status)));
        }

        let content = response.text().await.map_err(PostviewError::Http)?;
        let posts: Vec<Post> = serde_json::from_str(&content)?;

        tracing::debug!(count = posts.len(), "decoded posts");
        Ok(posts)
    }
}

#[async_trait]
impl PostSource for LivePostSource {
    async fn fetch_posts(&self) -> PostviewResult<Vec<Post>> {
        self.fetch_posts().await
    }
}
