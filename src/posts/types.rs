//! Post record and data source selection types

use serde::{Deserialize, Serialize};

/// One fetched item
///
/// The wire format calls the owner id `userId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub owner_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(owner_id: i64, id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            owner_id,
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Which data source implementation to construct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceKind {
    /// Fetch from the configured URL
    #[default]
    Live,
    /// Serve canned in-memory posts
    Static,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Live => write!(f, "live"),
            SourceKind::Static => write!(f, "static"),
        }
    }
}
