//! Headless browser bootstrap for end-to-end tests
//!
//! Before browser tests run, three things have to happen in order: the
//! browser binary is downloaded, the web server under test is up, and the
//! browser is launched. Each stage is an async collaborator so test suites
//! can plug in whatever installer, server and launcher they use.

use std::fmt;
use std::process::Stdio;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

use crate::{Error, Result};

/// Environment variable carrying the listener threshold to launched commands.
pub const LISTENER_THRESHOLD_VAR: &str = "CSSPIPE_MAX_LISTENERS";

/// Stage of the bootstrap sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapStage {
    /// Browser download
    Install,
    /// Web server start
    Server,
    /// Browser launch
    Launch,
}

impl fmt::Display for BootstrapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapStage::Install => write!(f, "install"),
            BootstrapStage::Server => write!(f, "server"),
            BootstrapStage::Launch => write!(f, "launch"),
        }
    }
}

/// Test runner settings relevant to the launch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Parallel test workers, when the runner caps them
    pub max_workers: Option<usize>,
}

impl BootstrapConfig {
    /// Listener threshold needed for one browser per worker.
    ///
    /// Each worker's browser registers an exit listener on the process, on
    /// top of the runner's own, hence `1 + max_workers`.
    pub fn listener_threshold(&self) -> Option<usize> {
        self.max_workers.map(|workers| workers.saturating_add(1))
    }
}

/// Outcome of a successful bootstrap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapReport {
    pub completed: Vec<BootstrapStage>,
    pub listener_threshold: Option<usize>,
}

#[async_trait]
pub trait BrowserInstaller: Send + Sync {
    async fn install(&self) -> Result<()>;
}

#[async_trait]
pub trait ServerStarter: Send + Sync {
    async fn start(&self) -> Result<()>;
}

#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn launch(&self, config: &BootstrapConfig) -> Result<()>;
}

/// Runs install, server start and launch strictly in sequence
pub struct BrowserBootstrap<I, S, L> {
    installer: I,
    server: S,
    launcher: L,
}

impl<I, S, L> BrowserBootstrap<I, S, L>
where
    I: BrowserInstaller,
    S: ServerStarter,
    L: BrowserLauncher,
{
    pub fn new(installer: I, server: S, launcher: L) -> Self {
        Self {
            installer,
            server,
            launcher,
        }
    }

    /// Run every stage, stopping at the first failure.
    pub async fn open(&self, config: &BootstrapConfig) -> Result<BootstrapReport> {
        let mut completed = Vec::with_capacity(3);

        tracing::debug!("Downloading browser");
        self.installer
            .install()
            .await
            .map_err(|e| stage_failed(BootstrapStage::Install, e))?;
        completed.push(BootstrapStage::Install);

        tracing::debug!("Waiting for web server");
        self.server
            .start()
            .await
            .map_err(|e| stage_failed(BootstrapStage::Server, e))?;
        completed.push(BootstrapStage::Server);

        tracing::debug!(max_workers = ?config.max_workers, "Launching browser");
        self.launcher
            .launch(config)
            .await
            .map_err(|e| stage_failed(BootstrapStage::Launch, e))?;
        completed.push(BootstrapStage::Launch);

        tracing::info!("Browser ready");
        Ok(BootstrapReport {
            completed,
            listener_threshold: config.listener_threshold(),
        })
    }
}

fn stage_failed(stage: BootstrapStage, error: Error) -> Error {
    match error {
        already @ Error::BootstrapFailed { .. } => already,
        other => Error::BootstrapFailed {
            stage,
            message: other.to_string(),
        },
    }
}

/// A bootstrap stage backed by an external command.
///
/// Works as any of the three stages. As a launcher, the listener threshold
/// is exported to the child in [`LISTENER_THRESHOLD_VAR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStage {
    program: String,
    args: Vec<String>,
}

impl CommandStage {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Parse a whitespace-separated command line.
    ///
    /// No quoting rules; use [`CommandStage::new`] and [`CommandStage::arg`]
    /// for arguments containing spaces.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).args(parts))
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn run(&self, threshold: Option<usize>) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(threshold) = threshold {
            command.env(LISTENER_THRESHOLD_VAR, threshold.to_string());
        }

        tracing::debug!(command = %self.display(), "Running bootstrap command");
        let status = command.status().await.map_err(|e| Error::CommandFailed {
            command: self.display(),
            message: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: self.display(),
                message: format!("exited with {status}"),
            })
        }
    }
}

#[async_trait]
impl BrowserInstaller for CommandStage {
    async fn install(&self) -> Result<()> {
        self.run(None).await
    }
}

#[async_trait]
impl ServerStarter for CommandStage {
    async fn start(&self) -> Result<()> {
        self.run(None).await
    }
}

#[async_trait]
impl BrowserLauncher for CommandStage {
    async fn launch(&self, config: &BootstrapConfig) -> Result<()> {
        self.run(config.listener_threshold()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_threshold() {
        assert_eq!(BootstrapConfig::default().listener_threshold(), None);
        let config = BootstrapConfig {
            max_workers: Some(4),
        };
        assert_eq!(config.listener_threshold(), Some(5));
    }

    #[test]
    fn test_parse_command_line() {
        let stage = CommandStage::parse("npx puppeteer browsers install chrome").unwrap();
        assert_eq!(stage.program, "npx");
        assert_eq!(stage.args, vec!["puppeteer", "browsers", "install", "chrome"]);
        assert!(CommandStage::parse("   ").is_none());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(BootstrapStage::Server.to_string(), "server");
    }
}
