//! In-memory post source for previews and tests

use crate::core::{PostviewError, PostviewResult};
use crate::di::traits::PostSource;
use crate::posts::types::Post;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Serves a fixed list of posts without any I/O
///
/// # Example
///
/// ```
/// use postview::posts::StaticPostSource;
///
/// let source = StaticPostSource::new();
/// let titles: Vec<_> = source.posts().iter().map(|p| p.title.as_str()).collect();
/// assert_eq!(titles, ["One", "Two"]);
/// ```
#[derive(Debug, Clone)]
pub struct StaticPostSource {
    posts: Vec<Post>,
}

impl StaticPostSource {
    /// Create a source serving the two canned posts
    pub fn new() -> Self {
        Self::with_posts(canned_posts())
    }

    /// Create a source serving exactly `posts`
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load the list from a JSON file in the same format the live endpoint serves
    pub fn from_json_file(path: &Path) -> PostviewResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PostviewError::Path(format!("Failed to read fixture {}: {}", path.display(), e))
        })?;
        let posts: Vec<Post> = serde_json::from_str(&content)?;
        Ok(Self::with_posts(posts))
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

impl Default for StaticPostSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch_posts(&self) -> PostviewResult<Vec<Post>> {
        Ok(self.posts.clone())
    }
}

fn canned_posts() -> Vec<Post> {
    vec![
        Post::new(1, 1, "One", "First canned post"),
        Post::new(1, 2, "Two", "Second canned post"),
    ]
}
