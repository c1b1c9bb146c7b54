//! Command implementations for css-cli

pub mod bootstrap;
pub mod resolve;
pub mod rules;

use std::path::Path;

use css_fs::NormalizedPath;
use css_meta::RuleTable;

use crate::error::Result;

pub use bootstrap::run_bootstrap;
pub use resolve::{ResolveArgs, run_resolve};
pub use rules::run_rules;

/// Rule table looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "csspipe.toml";

/// Load the rule table for a command.
///
/// An explicit `--config` must exist. Without one, `csspipe.toml` in the
/// working directory is used if present, otherwise the built-in table.
pub fn load_rules(cwd: &Path, config: Option<&Path>) -> Result<RuleTable> {
    let table = match config {
        Some(path) => RuleTable::load(&NormalizedPath::new(cwd.join(path)))?,
        None => RuleTable::load_or_default(&NormalizedPath::new(cwd.join(DEFAULT_CONFIG_FILE)))?,
    };
    Ok(table)
}
