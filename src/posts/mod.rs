//! Posts and the data sources that produce them
//!
//! Two implementations of [`PostSource`](crate::di::PostSource) live here:
//! - [`LivePostSource`] issues one HTTP GET and decodes a JSON array of posts
//! - [`StaticPostSource`] returns a fixed in-memory list without any I/O
//!
//! Which one a caller gets is decided once, at construction, by [`SourceKind`].

pub mod client;
pub mod static_source;
pub mod types;

pub use client::LivePostSource;
pub use static_source::StaticPostSource;
pub use types::{Post, SourceKind};
