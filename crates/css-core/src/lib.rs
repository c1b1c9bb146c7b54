//! Core of the CSS pipeline selector
//!
//! This crate decides which PostCSS plugins run on a stylesheet, and in
//! which order, from nothing but the file's path and the requested
//! deployment environment:
//!
//! - **Input normalization**: path strings and path-bearing objects fold into one form
//! - **Resolution**: ordered, pure pattern checks produce the plugin pipeline
//! - **Browser bootstrap**: sequenced download, server start and launch for browser tests
//!
//! # Architecture
//!
//! ```text
//!          css-cli
//!             |
//!          css-core
//!             |
//!     +-------+-------+
//!     |               |
//!  css-meta  ---->  css-fs
//! ```
//!
//! # Example
//!
//! ```
//! use css_core::{ResolveOptions, resolve};
//!
//! let config = resolve(&ResolveOptions::new("production").with_file("example-ie8.css"));
//! assert_eq!(config.env.as_str(), "oldie");
//! assert_eq!(config.plugin_names().first(), Some(&"autoprefixer"));
//! assert_eq!(config.plugin_names().last(), Some(&"cssnano"));
//! ```

pub mod bootstrap;
pub mod error;
pub mod input;
pub mod resolver;

pub use bootstrap::{
    BootstrapConfig, BootstrapReport, BootstrapStage, BrowserBootstrap, BrowserInstaller,
    BrowserLauncher, CommandStage, ServerStarter,
};
pub use error::{Error, Result};
pub use input::{FileReference, ResolveOptions};
pub use resolver::{ConfigResolver, PathMatch, ResolvedConfig, resolve};
