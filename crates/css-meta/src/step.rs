//! Plugin step descriptors
//!
//! A step names one PostCSS plugin and the options it should be
//! constructed with. Steps run in sequence, each transforming the output
//! of the previous one.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Environment;

/// Options object passed to a plugin.
pub type PluginOptions = Map<String, Value>;

/// Plugins the selector knows how to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginName {
    /// Vendor prefixes for the target browsers
    #[serde(rename = "autoprefixer")]
    Autoprefixer,
    /// Companion classes for each pseudo-class (`:hover` -> `.\:hover`)
    #[serde(rename = "postcss-pseudo-classes")]
    PseudoClasses,
    /// Strip media queries
    #[serde(rename = "postcss-unmq")]
    Unmq,
    /// `filter` fallback for `opacity`
    #[serde(rename = "postcss-unopacity")]
    Unopacity,
    /// Hex fallback for `rgba()` colours
    #[serde(rename = "postcss-color-rgba-fallback")]
    ColorRgbaFallback,
    /// Minification
    #[serde(rename = "cssnano")]
    Cssnano,
}

impl PluginName {
    /// The npm package name of the plugin.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginName::Autoprefixer => "autoprefixer",
            PluginName::PseudoClasses => "postcss-pseudo-classes",
            PluginName::Unmq => "postcss-unmq",
            PluginName::Unopacity => "postcss-unopacity",
            PluginName::ColorRgbaFallback => "postcss-color-rgba-fallback",
            PluginName::Cssnano => "cssnano",
        }
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a resolved pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginStep {
    pub name: PluginName,
    #[serde(default)]
    pub options: PluginOptions,
}

impl PluginStep {
    /// A step with an empty options object.
    pub fn new(name: PluginName) -> Self {
        Self {
            name,
            options: PluginOptions::new(),
        }
    }

    /// Add an option to this step.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Autoprefixer for the given environment.
    pub fn autoprefixer(env: &Environment) -> Self {
        Self::new(PluginName::Autoprefixer).with_option("env", env.as_str())
    }

    /// Pseudo-class companions, skipping selectors on the blacklist.
    pub fn pseudo_classes(blacklist: &[String]) -> Self {
        let step = Self::new(PluginName::PseudoClasses);
        if blacklist.is_empty() {
            step
        } else {
            step.with_option("blacklist", blacklist.to_vec())
        }
    }

    /// Media query stripping.
    pub fn unmq() -> Self {
        Self::new(PluginName::Unmq)
    }

    /// Opacity filter fallback.
    pub fn unopacity() -> Self {
        Self::new(PluginName::Unopacity)
    }

    /// RGBA colour fallback.
    pub fn color_rgba_fallback() -> Self {
        Self::new(PluginName::ColorRgbaFallback)
    }

    /// Minification.
    pub fn cssnano() -> Self {
        Self::new(PluginName::Cssnano)
    }

    /// Look up a string option.
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }
}
