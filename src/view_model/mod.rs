//! Presentation model for the post list
//!
//! [`PostListModel`] owns the observable list of posts. Constructing one
//! spawns a single fetch through the injected [`PostSource`]; the result is
//! published on a `tokio::sync::watch` channel that render surfaces subscribe
//! to. There is no refresh: one model, one load.

use crate::di::PostSource;
use crate::posts::Post;
use std::sync::{Arc, Weak};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

/// Observable post list driven by one fetch at construction
pub struct PostListModel {
    posts: Arc<watch::Sender<Vec<Post>>>,
    load: Mutex<Option<JoinHandle<()>>>,
}

impl PostListModel {
    /// Create the model and start loading posts from `source`
    ///
    /// The list starts empty. Must be called from within a tokio runtime.
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        let (posts, _) = watch::channel(Vec::new());
        let posts = Arc::new(posts);

        // The load task only holds a weak handle so a dropped model discards the result
        let load = tokio::spawn(load_posts(source, Arc::downgrade(&posts)));

        Self {
            posts,
            load: Mutex::new(Some(load)),
        }
    }

    /// Snapshot of the current list
    pub fn posts(&self) -> Vec<Post> {
        self.posts.borrow().clone()
    }

    /// Subscribe to changes of the list
    ///
    /// The receiver sees the channel close once the model is dropped.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Post>> {
        self.posts.subscribe()
    }

    /// Wait until the initial load has finished, successfully or not
    pub async fn settled(&self) {
        let mut load = self.load.lock().await;
        if let Some(handle) = load.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "post load task did not complete");
            }
        }
    }
}

async fn load_posts(source: Arc<dyn PostSource>, posts: Weak<watch::Sender<Vec<Post>>>) {
    match source.fetch_posts().await {
        Ok(fetched) => match posts.upgrade() {
            Some(posts) => {
                tracing::debug!(count = fetched.len(), "post list loaded");
                posts.send_replace(fetched);
            }
            None => tracing::debug!("model dropped before posts arrived, discarding"),
        },
        // Failures leave the list as it was
        Err(e) => tracing::warn!(error = %e, "failed to load posts"),
    }
}
