//! Pipeline resolution command

use std::io::Read;
use std::path::{Path, PathBuf};

use colored::Colorize;
use css_core::{ConfigResolver, PathMatch, ResolveOptions, ResolvedConfig};
use serde::Serialize;

use crate::commands::load_rules;
use crate::error::Result;

/// Arguments for `csspipe resolve`
#[derive(Debug, Clone, Default)]
pub struct ResolveArgs {
    pub file: Option<String>,
    pub env: String,
    pub stdin: bool,
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub explain: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct ExplainedConfig<'a> {
    #[serde(flatten)]
    config: &'a ResolvedConfig,
    matched: PathMatch,
}

/// Resolve and print the pipeline for a stylesheet
pub fn run_resolve(cwd: &Path, args: &ResolveArgs) -> Result<()> {
    let options = if args.stdin {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        parse_options(&input)?
    } else {
        let options = ResolveOptions::new(args.env.as_str());
        match &args.file {
            Some(file) => options.with_file(file.as_str()),
            None => options,
        }
    };

    let mut resolver = ConfigResolver::new(load_rules(cwd, args.config.as_deref())?)?;
    if let Some(root) = &args.root {
        resolver = resolver.with_root(cwd.join(root));
    }

    let config = resolver.resolve(&options);
    let matched = options
        .path()
        .map(|path| resolver.classify(&path))
        .unwrap_or_default();

    if args.json {
        let output = if args.explain {
            serde_json::to_string_pretty(&ExplainedConfig {
                config: &config,
                matched,
            })?
        } else {
            serde_json::to_string_pretty(&config)?
        };
        println!("{output}");
        return Ok(());
    }

    print!("{}", render_pipeline(&options, &config));
    if args.explain {
        print!("{}", render_match(&matched));
    }
    Ok(())
}

/// Parse a JSON options object as read from stdin
pub fn parse_options(input: &str) -> Result<ResolveOptions> {
    Ok(serde_json::from_str(input.trim())?)
}

/// Human-readable rendering of a pipeline
pub fn render_pipeline(options: &ResolveOptions, config: &ResolvedConfig) -> String {
    let target = options
        .path()
        .map(|path| path.to_string())
        .unwrap_or_else(|| "(no file)".to_string());

    let mut out = format!(
        "{} {} {}\n",
        "Pipeline for".bold(),
        target.cyan(),
        format!("(env: {})", config.env).dimmed()
    );

    for (index, step) in config.plugins.iter().enumerate() {
        if step.options.is_empty() {
            out.push_str(&format!("  {}. {}\n", index + 1, step.name));
        } else {
            let options = serde_json::to_string(&step.options).unwrap_or_default();
            out.push_str(&format!(
                "  {}. {} {}\n",
                index + 1,
                step.name,
                options.dimmed()
            ));
        }
    }

    out
}

fn render_match(matched: &PathMatch) -> String {
    let mark = |hit: bool| if hit { "yes".green() } else { "no".dimmed() };
    format!(
        "\n  {:<14} {}\n  {:<14} {}\n  {:<14} {}\n",
        "Legacy file:",
        mark(matched.legacy),
        "In app:",
        mark(matched.in_app),
        "Excluded:",
        mark(matched.excluded)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_core::FileReference;
    use css_meta::Environment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_options_with_object_file() {
        let options =
            parse_options(r#"{ "env": "production", "file": { "path": "app/a-ie8.css" } }"#)
                .unwrap();
        assert_eq!(options.env, Environment::Production);
        assert_eq!(
            options.file,
            Some(FileReference::Object {
                path: "app/a-ie8.css".to_string()
            })
        );
    }

    #[test]
    fn test_parse_options_rejects_missing_env() {
        assert!(parse_options(r#"{ "file": "a.css" }"#).is_err());
    }

    #[test]
    fn test_render_pipeline_lists_steps_in_order() {
        colored::control::set_override(false);
        let options = ResolveOptions::new("production").with_file("example-ie8.css");
        let config = css_core::resolve(&options);

        let rendered = render_pipeline(&options, &config);

        assert_eq!(
            rendered,
            "Pipeline for example-ie8.css (env: oldie)\n\
             \x20 1. autoprefixer {\"env\":\"oldie\"}\n\
             \x20 2. postcss-unmq\n\
             \x20 3. postcss-unopacity\n\
             \x20 4. postcss-color-rgba-fallback\n\
             \x20 5. cssnano\n"
        );
    }

    #[test]
    fn test_render_without_file() {
        colored::control::set_override(false);
        let options = ResolveOptions::new("production");
        let config = css_core::resolve(&options);

        assert!(render_pipeline(&options, &config).starts_with("Pipeline for (no file)"));
    }

    #[test]
    fn test_render_match() {
        colored::control::set_override(false);
        let rendered = render_match(&PathMatch {
            legacy: true,
            in_app: false,
            excluded: false,
        });
        assert!(rendered.contains("Legacy file:   yes"));
        assert!(rendered.contains("In app:        no"));
    }
}
