//! Filesystem layer for the CSS pipeline selector
//!
//! Provides lexical path normalization for stylesheet references and
//! format-agnostic loading of rule table files.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
