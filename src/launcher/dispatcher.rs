//! Offline and web tool dispatch.
//!
//! Offline tools go through a fixed fallback chain, first applicable step wins:
//! 1. the tool path must exist, otherwise `NotFound` and nothing else is tried
//! 2. an explicit command runs through the platform shell inside the tool path
//! 3. the first archive in the directory runs with its runner
//! 4. the first executable in the directory runs directly
//! 5. a terminal opens in the directory (or the directory itself is opened)

use crate::config::LaunchConfig;
use crate::domain::{OfflineTool, WebTool};
use crate::error::{Result, ToolshedError};

use super::Launcher;
use super::plan::{CommandSpec, LaunchOutcome, LaunchPlan, LaunchStrategy};
use super::platform::{ProcessLauncher, platform_launcher};
use super::scan;

pub struct Dispatcher {
    platform: Box<dyn ProcessLauncher>,
}

impl Dispatcher {
    pub fn new(platform: Box<dyn ProcessLauncher>) -> Self {
        Self { platform }
    }

    /// Dispatcher for the running OS.
    pub fn for_current_os(config: &LaunchConfig) -> Self {
        Self::new(platform_launcher(config))
    }

    /// Strategy picked for this OS.
    pub fn platform(&self) -> &dyn ProcessLauncher {
        self.platform.as_ref()
    }

    /// Decide how `tool` would be launched without starting anything.
    pub fn plan(&self, tool: &OfflineTool) -> Result<LaunchPlan> {
        let dir = tool.dir();
        if !dir.exists() {
            return Err(ToolshedError::NotFound(format!("tool path {}", dir.display())));
        }

        if tool.has_command() {
            log::info!("{}: running command {:?} in {}", tool.name, tool.command, dir.display());
            return Ok(LaunchPlan::attached(
                LaunchStrategy::Command,
                self.platform.shell_command(&tool.command),
                dir,
            ));
        }

        let entries = scan::list_dir(dir);

        if let Some((file, kind)) = scan::find_archive(&entries) {
            log::info!("{}: found {:?} archive {}", tool.name, kind, file.display());
            let command = self.platform.archive_command(kind, &file);
            return Ok(LaunchPlan::attached(LaunchStrategy::Archive(file), command, dir));
        }

        if let Some(exe) = scan::find_executable(&entries) {
            log::info!("{}: found executable {}", tool.name, exe.display());
            let command = CommandSpec::new(exe.to_string_lossy().to_string(), Vec::<String>::new());
            return Ok(LaunchPlan::attached(LaunchStrategy::Executable(exe), command, dir));
        }

        log::info!("{}: nothing runnable in {}, opening a shell there", tool.name, dir.display());
        Ok(self.platform.terminal_plan(dir))
    }

    /// Plan opening a web tool's URL. The URL is passed through unchecked.
    pub fn plan_web(&self, tool: &WebTool) -> LaunchPlan {
        LaunchPlan::detached(LaunchStrategy::OpenUrl, self.platform.open_command(&tool.url))
    }
}

impl Launcher for Dispatcher {
    fn launch_offline(&self, tool: &OfflineTool) -> Result<LaunchOutcome> {
        let plan = self.plan(tool)?;
        let outcome = plan.spawn()?;
        if outcome.degraded {
            log::warn!("{}: launched with reduced fidelity ({:?})", tool.name, outcome.strategy);
        }
        Ok(outcome)
    }

    fn open_web(&self, tool: &WebTool) -> Result<LaunchOutcome> {
        log::info!("{}: opening {}", tool.name, tool.url);
        self.plan_web(tool).spawn()
    }
}
