//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// csspipe - choose the PostCSS pipeline for a stylesheet
#[derive(Parser, Debug)]
#[command(name = "csspipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the plugin pipeline for a stylesheet
    ///
    /// Examples:
    ///   csspipe resolve app/assets/scss/app.css
    ///   csspipe resolve --env oldie example.css --json
    ///   echo '{"env":"production","file":{"path":"a-ie8.css"}}' | csspipe resolve --stdin
    Resolve {
        /// Stylesheet path (omit to get the default pipeline)
        #[arg(conflicts_with = "stdin")]
        file: Option<String>,

        /// Deployment environment passed to autoprefixer (ignored with --stdin)
        #[arg(short, long, env = "CSSPIPE_ENV", default_value = "production")]
        env: String,

        /// Read a JSON options object `{ env, file? }` from stdin
        #[arg(long)]
        stdin: bool,

        /// Project root that absolute paths are made relative to
        #[arg(long)]
        root: Option<PathBuf>,

        /// Rule table file (defaults to ./csspipe.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show which path rules matched
        #[arg(long)]
        explain: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the effective rule table
    Rules {
        /// Rule table file (defaults to ./csspipe.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Download, serve and launch a headless browser for end-to-end tests
    Bootstrap {
        /// Command that downloads the browser
        #[arg(long)]
        install: String,

        /// Command that starts (or waits for) the web server
        #[arg(long)]
        server: String,

        /// Command that launches the browser
        #[arg(long)]
        launch: String,

        /// Parallel test workers, one browser each
        #[arg(long)]
        max_workers: Option<usize>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
