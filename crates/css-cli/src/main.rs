//! csspipe CLI
//!
//! Prints the PostCSS plugin pipeline chosen for a stylesheet, and
//! bootstraps the headless browser used by end-to-end tests.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::ResolveArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow(), e);
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} CSS pipeline selector", "csspipe".green().bold());
            println!();
            println!("Run {} for available commands.", "csspipe --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Resolve {
            file,
            env,
            stdin,
            root,
            config,
            explain,
            json,
        } => commands::run_resolve(
            &cwd,
            &ResolveArgs {
                file,
                env,
                stdin,
                root,
                config,
                explain,
                json,
            },
        ),
        Commands::Rules { config, json } => commands::run_rules(&cwd, config.as_deref(), json),
        Commands::Bootstrap {
            install,
            server,
            launch,
            max_workers,
            json,
        } => commands::run_bootstrap(&install, &server, &launch, max_workers, json),
    }
}
