//! Launch dispatcher
//!
//! Brings a cataloged tool to a runnable state:
//! - `dispatcher`: the ordered fallback chain for offline tools, URL opening for web tools
//! - `platform`: per-OS `ProcessLauncher` strategies chosen once at startup
//! - `scan`: directory probes for archives and executables
//! - `plan`: the decided command, spawned detached
//!
//! Launched processes are fire-and-forget. Nothing here waits on a child or reads
//! its exit status.

pub mod dispatcher;
pub mod plan;
pub mod platform;
pub mod scan;

pub use dispatcher::Dispatcher;
pub use plan::{CommandSpec, LaunchOutcome, LaunchPlan, LaunchStrategy, StdioMode};
pub use platform::{
    GenericLauncher, LinuxLauncher, MacLauncher, ProcessLauncher, WindowsLauncher, launcher_for,
    platform_launcher,
};
pub use scan::ArchiveKind;

use crate::domain::{OfflineTool, WebTool};
use crate::error::Result;

/// What the interaction shell needs from a dispatcher.
pub trait Launcher {
    /// Start an offline tool. `Ok` means a process was started.
    fn launch_offline(&self, tool: &OfflineTool) -> Result<LaunchOutcome>;

    /// Hand a web tool's URL to the OS opener.
    fn open_web(&self, tool: &WebTool) -> Result<LaunchOutcome>;
}
