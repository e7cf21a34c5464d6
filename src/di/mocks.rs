//! Mock implementations of service traits for testing

use super::traits::{ConfigProvider, PostSource};
use crate::core::{PostviewError, PostviewResult};
use crate::posts::Post;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use postview::di::mocks::MockConfigProvider;
/// use postview::di::ConfigProvider;
///
/// let mut config = MockConfigProvider::default();
/// config.posts_url = "http://127.0.0.1:3000/posts".to_string();
///
/// assert_eq!(config.posts_url(), "http://127.0.0.1:3000/posts");
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub posts_url: String,
    pub request_timeout: Duration,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            posts_url: "http://localhost/posts".to_string(),
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn posts_url(&self) -> &str {
        &self.posts_url
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

/// Mock post source for testing
///
/// Returns a scripted result, counts calls, and can hold each fetch open
/// until [`release`](MockPostSource::release) is called.
///
/// # Example
///
/// ```
/// use postview::di::mocks::MockPostSource;
/// use postview::di::PostSource;
///
/// let source = MockPostSource::failing("connection reset");
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
///
/// assert!(rt.block_on(source.fetch_posts()).is_err());
/// assert_eq!(source.calls(), 1);
/// ```
pub struct MockPostSource {
    result: Result<Vec<Post>, String>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockPostSource {
    /// Create a mock that succeeds with an empty list
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Create a mock that succeeds with `posts`
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            result: Ok(posts),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Create a mock whose fetch fails with a `Fetch` error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Hold every fetch until `release` is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Let one held fetch complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of times `fetch_posts` has been called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockPostSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostSource for MockPostSource {
    async fn fetch_posts(&self) -> PostviewResult<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.result.clone().map_err(PostviewError::Fetch)
    }
}
