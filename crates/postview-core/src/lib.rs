//! Core utilities shared by the Postview crates: the error type, the
//! user-facing error formatter and platform paths.

pub mod core;
pub mod error_help;

pub use crate::core::error::{PostviewError, PostviewResult};
pub use error_help::{format_error_with_help, ErrorHelp};
