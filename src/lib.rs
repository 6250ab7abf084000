//! # rjs - JavaScript page updates for Ajax responses
//!
//! View code describes DOM changes against a [`PageGenerator`]; the
//! generator serializes them into one JavaScript program for the browser.
//!
//! ## Architecture
//!
//! - **generator**: statement recorder and call chains
//! - **encoding**: argument encoding to JSON or raw JavaScript
//! - **view**: the view-context collaborator and `<script>` markup
//! - **helpers**: `update_page` entry points
//! - **config**: render configuration
//! - **utils**: shared error types

pub mod config;
pub mod encoding;
pub mod generator;
pub mod helpers;
pub mod utils;
pub mod view;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use encoding::{Argument, EncoderOptions};
pub use generator::{CallChain, Item, Location, PageGenerator, RenderTarget};
pub use helpers::{update_page, update_page_tag};
pub use utils::error::{RjsError, Result};
pub use view::{
    javascript_tag, NullContext, RenderOptions, ScriptTagOptions, UrlOptions, ViewContext,
};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "rjs";
