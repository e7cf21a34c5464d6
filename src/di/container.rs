//! Service container for dependency injection

use super::traits::{ConfigProvider, PostSource};
use crate::config::Config;
use crate::core::PostviewResult;
use crate::posts::{LivePostSource, SourceKind, StaticPostSource};
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the services through trait objects (`Arc<dyn Trait>`), so the
/// production data source and a static or mock one are interchangeable.
/// The container is passed around explicitly; nothing reaches it globally.
///
/// # Example (Testing)
///
/// ```
/// use postview::di::{ConfigProvider, ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let config = Arc::new(MockConfigProvider::default());
/// let source = Arc::new(MockPostSource::new());
///
/// let container = ServiceContainer::with_providers(config, source);
/// assert_eq!(container.config().posts_url(), "http://localhost/posts");
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub post_source: Arc<dyn PostSource>,
}

impl ServiceContainer {
    /// Create a container from the on-disk config with the selected source
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or created, or
    /// the HTTP client cannot be built.
    pub fn new(kind: SourceKind) -> PostviewResult<Self> {
        Self::from_config(Config::load()?, kind)
    }

    /// Create a container from an already loaded config
    pub fn from_config(config: Config, kind: SourceKind) -> PostviewResult<Self> {
        let post_source: Arc<dyn PostSource> = match kind {
            SourceKind::Live => Arc::new(LivePostSource::from_config(&config)?),
            SourceKind::Static => Arc::new(StaticPostSource::new()),
        };
        tracing::debug!(source = %kind, "built post source");

        Ok(Self {
            config: Arc::new(config),
            post_source,
        })
    }

    /// Create a service container with custom provider implementations
    ///
    /// This is primarily useful for testing, where mock implementations
    /// of each service are injected.
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        post_source: Arc<dyn PostSource>,
    ) -> Self {
        Self {
            config,
            post_source,
        }
    }

    /// Replace the post source, keeping the config
    pub fn with_post_source(mut self, post_source: Arc<dyn PostSource>) -> Self {
        self.post_source = post_source;
        self
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Get a shared handle to the post source, for injection into a model
    pub fn post_source(&self) -> Arc<dyn PostSource> {
        Arc::clone(&self.post_source)
    }
}
