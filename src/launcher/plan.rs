//! Launch plans and detached spawning.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, ToolshedError};

/// Which step of the fallback chain produced a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchStrategy {
    /// The tool's explicit command line, run through the platform shell
    Command,
    /// A packaged archive run by its runner
    Archive(PathBuf),
    /// An executable file found in the tool directory
    Executable(PathBuf),
    /// A terminal window opened in the tool directory
    Terminal(String),
    /// The tool directory handed to the default file handler
    OpenDirectory,
    /// A URL handed to the default URL handler
    OpenUrl,
}

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the invoking terminal so the tool can be interactive
    Inherit,
    /// Detach from the terminal entirely
    Null,
}

/// Program and arguments, before any process exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a started launch. Only "started" is observable; exit status never is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub strategy: LaunchStrategy,
    /// The preferred mechanism was unavailable and a lower-fidelity one was used
    pub degraded: bool,
}

/// A fully decided launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub strategy: LaunchStrategy,
    pub command: CommandSpec,
    pub working_dir: Option<PathBuf>,
    pub stdio: StdioMode,
    pub degraded: bool,
}

impl LaunchPlan {
    /// Plan that runs in `dir` and shares the invoking terminal.
    pub fn attached(strategy: LaunchStrategy, command: CommandSpec, dir: impl Into<PathBuf>) -> Self {
        Self {
            strategy,
            command,
            working_dir: Some(dir.into()),
            stdio: StdioMode::Inherit,
            degraded: false,
        }
    }

    /// Plan for a window or handler that owns its own I/O.
    pub fn detached(strategy: LaunchStrategy, command: CommandSpec) -> Self {
        Self {
            strategy,
            command,
            working_dir: None,
            stdio: StdioMode::Null,
            degraded: false,
        }
    }

    pub fn degraded(mut self) -> Self {
        self.degraded = true;
        self
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.command.program);
        command.args(&self.command.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        match self.stdio {
            StdioMode::Inherit => {
                command.stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            StdioMode::Null => {
                command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
            }
        }
        command
    }

    /// Start the process and return without waiting on it.
    pub fn spawn(&self) -> Result<LaunchOutcome> {
        let child = self
            .to_command()
            .spawn()
            .map_err(|e| ToolshedError::LaunchFailed(format!("{}: {}", self.command.program, e)))?;

        log::info!("Started pid {} ({:?}): {}", child.id(), self.strategy, self.command);

        Ok(LaunchOutcome {
            strategy: self.strategy.clone(),
            degraded: self.degraded,
        })
    }
}
