//! Deployment environment labels
//!
//! The environment is handed to autoprefixer, which maps it to a
//! browserslist environment. Only `oldie` changes which steps run.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment environment label.
///
/// Labels other than `production` and `oldie` are carried verbatim.
/// Matching is exact: `Production` is an unrecognized label, not an alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    /// Regular production build.
    #[default]
    Production,

    /// Legacy-browser (IE8) compatibility build.
    Oldie,

    /// Any other caller-supplied label.
    Other(String),
}

impl Environment {
    /// The label as passed to plugins.
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Production => "production",
            Environment::Oldie => "oldie",
            Environment::Other(label) => label,
        }
    }

    /// Whether this environment targets legacy browsers.
    ///
    /// Decided by the label, so `Other("oldie")` counts as well.
    pub fn is_legacy(&self) -> bool {
        self.as_str() == "oldie"
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "production" => Environment::Production,
            "oldie" => Environment::Oldie,
            other => Environment::Other(other.to_string()),
        })
    }
}

impl From<&str> for Environment {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(env) => env,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        Environment::from(s.as_str())
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
