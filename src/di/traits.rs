//! Trait definitions for dependency injection

use crate::core::PostviewResult;
use crate::posts::Post;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Get the URL the live source fetches posts from
    fn posts_url(&self) -> &str;

    /// Get the timeout applied to the whole HTTP request
    fn request_timeout(&self) -> Duration;
}

/// Trait for fetching posts
///
/// Each call is independent: no caching, no sharing of in-flight requests.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the full list of posts, in the order the source provides them
    async fn fetch_posts(&self) -> PostviewResult<Vec<Post>>;
}
