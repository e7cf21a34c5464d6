//! Dependency injection infrastructure for Postview
//!
//! Services are reached through traits and passed in at construction. There
//! is no process-wide instance of any of them.
//!
//! # Example (Production)
//! ```no_run
//! use postview::di::ServiceContainer;
//! use postview::posts::SourceKind;
//!
//! # fn example() -> postview::core::PostviewResult<()> {
//! let container = ServiceContainer::new(SourceKind::Live)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use postview::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let config = Arc::new(MockConfigProvider::default());
//! let source = Arc::new(MockPostSource::new());
//!
//! let container = ServiceContainer::with_providers(config, source);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ConfigProvider, PostSource};
