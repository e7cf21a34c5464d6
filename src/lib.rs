//! Postview
//!
//! Fetches a list of posts from an injected data source, holds it in an
//! observable presentation model and renders the titles as a scrollable
//! column. The error type and paths live in `postview-core` and are
//! re-exported here.

pub use postview_core::{format_error_with_help, ErrorHelp, PostviewError, PostviewResult};

/// Core module re-exported from postview-core.
pub mod core {
    pub use postview_core::core::*;
    pub use postview_core::*;

    /// Path module re-exported from postview-core.
    pub mod path {
        pub use postview_core::core::path::*;
    }
}

/// Configuration management.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// Post record type and data sources.
pub mod posts;

/// Presentation model holding the observable post list.
pub mod view_model;

/// Terminal render surface.
pub mod render;
