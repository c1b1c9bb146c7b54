//! Browser bootstrap command

use colored::Colorize;
use css_core::{BootstrapConfig, BrowserBootstrap, CommandStage};

use crate::error::{CliError, Result};

/// Run the install, server and launch commands in sequence
pub fn run_bootstrap(
    install: &str,
    server: &str,
    launch: &str,
    max_workers: Option<usize>,
    json: bool,
) -> Result<()> {
    let bootstrap = BrowserBootstrap::new(
        parse_stage("install", install)?,
        parse_stage("server", server)?,
        parse_stage("launch", launch)?,
    );
    let config = BootstrapConfig { max_workers };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(bootstrap.open(&config))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for stage in &report.completed {
        println!("  {} {}", "+".green(), stage);
    }
    if let Some(threshold) = report.listener_threshold {
        println!("  {:<20} {}", "Listener threshold:".dimmed(), threshold);
    }
    println!("{}", "Browser ready".green().bold());
    Ok(())
}

fn parse_stage(name: &str, command_line: &str) -> Result<CommandStage> {
    CommandStage::parse(command_line)
        .ok_or_else(|| CliError::user(format!("--{name} needs a command to run")))
}
