//! Integration tests module
//!
//! Each submodule drives the `postview` binary for one command.

pub mod common;
pub mod config;
pub mod list;
