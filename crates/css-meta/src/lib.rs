//! Domain vocabulary for the CSS pipeline selector.
//!
//! This crate holds the data the resolver reasons about: deployment
//! environments, plugin steps, and the path rule table.

pub mod environment;
pub mod error;
pub mod rules;
pub mod step;

pub use environment::Environment;
pub use error::{Error, Result};
pub use rules::RuleTable;
pub use step::{PluginName, PluginOptions, PluginStep};
