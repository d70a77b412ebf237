//! pip-backed installer.

use crate::config::InstallerSettings;
use crate::error::Result;
use crate::shell::{display_command, execute, CommandOptions};
use std::path::{Path, PathBuf};

use super::{InstallOutcome, InstallRequest, Installer};

/// Runs `pip install` (or a compatible command) as a child process.
///
/// The child's stdout and stderr are inherited so the installer's own
/// diagnostics reach the user unchanged.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    command: Vec<String>,
    cwd: Option<PathBuf>,
}

impl PipInstaller {
    /// Installer invoked through `command`, e.g. `["python3.11", "-m", "pip"]`.
    pub fn new(command: Vec<String>) -> Self {
        Self { command, cwd: None }
    }

    /// Installer described by config settings.
    pub fn from_settings(settings: &InstallerSettings) -> Self {
        Self::new(settings.command.clone())
    }

    /// Run the installer from `cwd`, so relative paths resolve against it.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Full argv for a request.
    pub fn argv(&self, request: &InstallRequest<'_>) -> Vec<String> {
        let mut argv = self.command.clone();
        argv.push("install".to_string());
        argv.push("-r".to_string());
        argv.push(path_arg(request.requirements));
        argv.push("--target".to_string());
        argv.push(path_arg(request.target));

        if let Some(constraints) = request.constraints {
            argv.extend(constraints.to_args());
        }
        if request.upgrade {
            argv.push("--upgrade".to_string());
        }

        argv
    }
}

impl Installer for PipInstaller {
    fn describe(&self, request: &InstallRequest<'_>) -> String {
        display_command(&self.argv(request))
    }

    fn install(&self, request: &InstallRequest<'_>) -> Result<InstallOutcome> {
        let argv = self.argv(request);
        let options = CommandOptions {
            cwd: self.cwd.clone(),
        };

        let result = execute(&argv, &options)?;

        Ok(InstallOutcome {
            command: display_command(&argv),
            exit_code: result.exit_code,
            success: result.success,
            duration: result.duration,
        })
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
