//! Per-OS process launching strategies.
//!
//! Each OS family differs in how it runs a shell command line, how it opens a
//! terminal in a directory, and how it opens a URL or folder. A `ProcessLauncher`
//! captures those differences; the dispatcher picks one at startup and never
//! branches on the OS itself.

use std::path::Path;

use crate::config::LaunchConfig;

use super::plan::{CommandSpec, LaunchPlan, LaunchStrategy};
use super::scan::ArchiveKind;

pub trait ProcessLauncher: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &'static str;

    fn config(&self) -> &LaunchConfig;

    /// Run an arbitrary command line through the platform shell.
    fn shell_command(&self, command_line: &str) -> CommandSpec {
        CommandSpec::new(self.config().shell.clone(), ["-c".to_string(), command_line.to_string()])
    }

    /// Run a packaged archive with its runner.
    fn archive_command(&self, kind: ArchiveKind, file: &Path) -> CommandSpec {
        let file = file.to_string_lossy().to_string();
        match kind {
            ArchiveKind::Jar => CommandSpec::new(self.config().java.clone(), ["-jar".to_string(), file]),
            ArchiveKind::Pyz => CommandSpec::new(self.config().python.clone(), [file]),
        }
    }

    /// Hand a URL or path to the default handler.
    fn open_command(&self, target: &str) -> CommandSpec;

    /// Open an interactive shell rooted at `dir`. Best effort: may degrade to
    /// opening the directory.
    fn terminal_plan(&self, dir: &Path) -> LaunchPlan;
}

/// Quote `value` for a POSIX shell.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn open_directory_plan(launcher: &dyn ProcessLauncher, dir: &Path) -> LaunchPlan {
    LaunchPlan::detached(
        LaunchStrategy::OpenDirectory,
        launcher.open_command(&dir.to_string_lossy()),
    )
}

/// macOS: Terminal.app driven through AppleScript.
pub struct MacLauncher {
    config: LaunchConfig,
}

impl MacLauncher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    fn script(dir: &Path) -> String {
        let shell_line = format!("cd {} && exec $SHELL -l", shell_quote(&dir.to_string_lossy()));
        let escaped = shell_line.replace('\\', "\\\\").replace('"', "\\\"");
        format!(
            "tell application \"Terminal\"\n    activate\n    do script \"{}\"\nend tell",
            escaped
        )
    }
}

impl ProcessLauncher for MacLauncher {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn config(&self) -> &LaunchConfig {
        &self.config
    }

    fn open_command(&self, target: &str) -> CommandSpec {
        CommandSpec::new("open", [target])
    }

    fn terminal_plan(&self, dir: &Path) -> LaunchPlan {
        LaunchPlan::detached(
            LaunchStrategy::Terminal("Terminal".to_string()),
            CommandSpec::new("osascript", ["-e".to_string(), Self::script(dir)]),
        )
    }
}

/// Linux: first available terminal emulator, else the file manager.
pub struct LinuxLauncher {
    config: LaunchConfig,
}

impl LinuxLauncher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    fn terminal_args(&self, terminal: &str, dir: &Path) -> Vec<String> {
        let shell = &self.config.interactive_shell;
        let script = format!("cd {} && exec {}", shell_quote(&dir.to_string_lossy()), shell);
        // gnome-terminal takes the command after `--`; the others use `-e`
        let separator = if terminal == "gnome-terminal" { "--" } else { "-e" };
        vec![separator.to_string(), shell.clone(), "-c".to_string(), script]
    }
}

impl ProcessLauncher for LinuxLauncher {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn config(&self) -> &LaunchConfig {
        &self.config
    }

    fn open_command(&self, target: &str) -> CommandSpec {
        CommandSpec::new("xdg-open", [target])
    }

    fn terminal_plan(&self, dir: &Path) -> LaunchPlan {
        for terminal in &self.config.terminals {
            match which::which(terminal) {
                Ok(found) => {
                    log::debug!("Using terminal {} at {}", terminal, found.display());
                    return LaunchPlan::detached(
                        LaunchStrategy::Terminal(terminal.clone()),
                        CommandSpec::new(terminal.clone(), self.terminal_args(terminal, dir)),
                    );
                }
                Err(_) => log::debug!("Terminal {} not on PATH", terminal),
            }
        }

        log::warn!(
            "No terminal emulator found (tried {:?}), opening {} instead",
            self.config.terminals,
            dir.display()
        );
        open_directory_plan(self, dir).degraded()
    }
}

/// Windows: cmd.exe for commands, a new console window for the shell fallback.
pub struct WindowsLauncher {
    config: LaunchConfig,
}

impl WindowsLauncher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }
}

impl ProcessLauncher for WindowsLauncher {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn config(&self) -> &LaunchConfig {
        &self.config
    }

    fn shell_command(&self, command_line: &str) -> CommandSpec {
        CommandSpec::new("cmd", ["/C", command_line])
    }

    fn open_command(&self, target: &str) -> CommandSpec {
        // The empty argument is the window title `start` expects before a quoted target
        CommandSpec::new("cmd", ["/C", "start", "", target])
    }

    fn terminal_plan(&self, dir: &Path) -> LaunchPlan {
        let dir = dir.to_string_lossy().to_string();
        LaunchPlan::detached(
            LaunchStrategy::Terminal("cmd.exe".to_string()),
            CommandSpec::new(
                "cmd",
                ["/C", "start", "", "cmd.exe", "/K", "cd", "/d", dir.as_str()],
            ),
        )
    }
}

/// Any other OS: POSIX shell for commands, directory opener as the terminal fallback.
pub struct GenericLauncher {
    config: LaunchConfig,
}

impl GenericLauncher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }
}

impl ProcessLauncher for GenericLauncher {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn config(&self) -> &LaunchConfig {
        &self.config
    }

    fn open_command(&self, target: &str) -> CommandSpec {
        CommandSpec::new("xdg-open", [target])
    }

    fn terminal_plan(&self, dir: &Path) -> LaunchPlan {
        open_directory_plan(self, dir).degraded()
    }
}

/// Launcher for an `std::env::consts::OS` value.
pub fn launcher_for(os: &str, config: &LaunchConfig) -> Box<dyn ProcessLauncher> {
    match os {
        "macos" => Box::new(MacLauncher::new(config.clone())),
        "linux" => Box::new(LinuxLauncher::new(config.clone())),
        "windows" => Box::new(WindowsLauncher::new(config.clone())),
        _ => Box::new(GenericLauncher::new(config.clone())),
    }
}

/// Launcher for the OS this binary runs on.
pub fn platform_launcher(config: &LaunchConfig) -> Box<dyn ProcessLauncher> {
    let launcher = launcher_for(std::env::consts::OS, config);
    log::debug!("Selected {} process launcher", launcher.name());
    launcher
}
