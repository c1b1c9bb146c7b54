//! Plugin pipeline resolution
//!
//! The `ConfigResolver` turns a stylesheet path and a deployment environment
//! into the ordered list of PostCSS steps to run on that file.
//!
//! # Decision order
//!
//! 1. **Environment** - a legacy file name (`*-ie8.css`, `*-ie8.min.css`)
//!    forces `oldie`; otherwise the caller's label is kept as-is.
//! 2. **Baseline** - `autoprefixer` with the effective environment, always first.
//! 3. **Application** - `postcss-pseudo-classes` for files under the
//!    application subtree that are not in an excluded subtree.
//! 4. **Legacy** - `postcss-unmq`, `postcss-unopacity` and
//!    `postcss-color-rgba-fallback` when the effective environment is `oldie`.
//! 5. **Baseline** - `cssnano`, always last.
//!
//! Resolution is a pure function of the rule table, the path string and the
//! environment. Nothing is read from disk.

mod predicates;

use std::sync::LazyLock;

use css_fs::NormalizedPath;
use css_meta::{Environment, PluginName, PluginStep, RuleTable};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::input::ResolveOptions;

pub use predicates::{in_app_subtree, in_excluded_subtree, is_legacy_stylesheet, legacy_pattern};

/// An ordered plugin pipeline for one stylesheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Environment handed to the steps after legacy detection
    pub env: Environment,

    /// Steps in execution order
    pub plugins: Vec<PluginStep>,
}

impl ResolvedConfig {
    /// Plugin names in execution order.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|step| step.name.as_str()).collect()
    }

    /// Whether a plugin is part of the pipeline.
    pub fn contains(&self, name: PluginName) -> bool {
        self.plugins.iter().any(|step| step.name == name)
    }

    /// The step for a plugin, if scheduled.
    pub fn step(&self, name: PluginName) -> Option<&PluginStep> {
        self.plugins.iter().find(|step| step.name == name)
    }
}

/// Which rules a path triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMatch {
    /// File name carries the legacy marker
    pub legacy: bool,
    /// Directory is under the application subtree
    pub in_app: bool,
    /// Directory is under an excluded subtree
    pub excluded: bool,
}

impl PathMatch {
    /// Whether the pseudo-class step applies.
    pub fn wants_pseudo_classes(&self) -> bool {
        self.in_app && !self.excluded
    }
}

/// Resolves plugin pipelines against a rule table
///
/// Holds only immutable data, so one resolver can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    rules: RuleTable,
    legacy_pattern: Regex,
    app: NormalizedPath,
    excluded: Vec<NormalizedPath>,
    root: Option<NormalizedPath>,
}

static DEFAULT_RESOLVER: LazyLock<ConfigResolver> = LazyLock::new(|| {
    ConfigResolver::new(RuleTable::default()).expect("Built-in rule table must be valid")
});

impl ConfigResolver {
    /// Create a resolver for the given rule table.
    ///
    /// The table is validated and the legacy pattern compiled up front so
    /// that `resolve` itself cannot fail.
    pub fn new(rules: RuleTable) -> Result<Self> {
        rules.validate()?;
        let legacy_pattern = legacy_pattern(&rules.legacy_marker)?;

        Ok(Self {
            app: rules.app_path(),
            excluded: rules.excluded_paths(),
            legacy_pattern,
            rules,
            root: None,
        })
    }

    /// Resolver with the built-in rule table.
    pub fn builtin() -> &'static Self {
        &DEFAULT_RESOLVER
    }

    /// Treat paths under `root` as relative to it.
    ///
    /// Rule subtrees are relative to the project root. Absolute paths
    /// outside `root` are matched as given, which means they only ever
    /// pick up the legacy rule.
    pub fn with_root(mut self, root: impl Into<NormalizedPath>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Evaluate the path predicates for a file.
    pub fn classify(&self, path: &NormalizedPath) -> PathMatch {
        let path = self.relative(path);
        let in_app = in_app_subtree(&path, &self.app);

        PathMatch {
            legacy: is_legacy_stylesheet(&path, &self.legacy_pattern),
            in_app,
            excluded: in_app && in_excluded_subtree(&path, &self.excluded),
        }
    }

    /// Resolve the plugin pipeline for the given options.
    pub fn resolve(&self, options: &ResolveOptions) -> ResolvedConfig {
        let path = options.path();
        let matched = path
            .as_ref()
            .map(|path| self.classify(path))
            .unwrap_or_default();

        let env = if matched.legacy {
            Environment::Oldie
        } else {
            options.env.clone()
        };

        let mut plugins = vec![PluginStep::autoprefixer(&env)];

        if matched.wants_pseudo_classes() {
            plugins.push(PluginStep::pseudo_classes(&self.rules.pseudo_class_blacklist));
        }

        if env.is_legacy() {
            plugins.push(PluginStep::unmq());
            plugins.push(PluginStep::unopacity());
            plugins.push(PluginStep::color_rgba_fallback());
        }

        plugins.push(PluginStep::cssnano());

        tracing::debug!(
            path = path.as_ref().map(NormalizedPath::as_str).unwrap_or(""),
            requested_env = %options.env,
            env = %env,
            steps = plugins.len(),
            "Resolved plugin pipeline"
        );

        ResolvedConfig { env, plugins }
    }

    /// Shorthand for resolving a path string.
    pub fn resolve_path(&self, env: impl Into<Environment>, path: &str) -> ResolvedConfig {
        self.resolve(&ResolveOptions::new(env).with_file(path))
    }

    fn relative(&self, path: &NormalizedPath) -> NormalizedPath {
        self.root
            .as_ref()
            .and_then(|root| path.strip_dir_prefix(root.as_str()))
            .unwrap_or_else(|| path.clone())
    }
}

/// Resolve against the built-in rule table.
pub fn resolve(options: &ResolveOptions) -> ResolvedConfig {
    ConfigResolver::builtin().resolve(options)
}
