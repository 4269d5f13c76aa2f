//! Common utilities for the Wattle HTML builder.
//!
//! This crate provides shared infrastructure used by the builder crates:
//! - **URL resolution** - app-root (`~/`) URL rewriting hooks

pub mod url;

pub use url::{AppRootResolver, UrlResolver, rewrite_app_root_url};
