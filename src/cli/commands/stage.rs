//! Stage command implementation.
//!
//! `layerstage stage` (or plain `layerstage`) creates the layer directory
//! and installs the requirements into it.

use std::path::{Path, PathBuf};

use crate::cli::args::StageArgs;
use crate::config::StageConfig;
use crate::error::Result;
use crate::installer::PipInstaller;
use crate::stager::Stager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The stage command implementation.
pub struct StageCommand {
    project_root: PathBuf,
    config: StageConfig,
    args: StageArgs,
}

impl StageCommand {
    /// Create a new stage command.
    pub fn new(project_root: &Path, config: StageConfig, args: StageArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StageArgs {
        &self.args
    }
}

impl Command for StageCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installer =
            PipInstaller::from_settings(&self.config.installer).with_cwd(&self.project_root);
        let stager = Stager::new(&self.config, &installer, &self.project_root);

        if self.args.dry_run {
            let plan = stager.plan();
            ui.message(&format!("Dry run: would create {}", plan.site_packages.display()));
            ui.message(&format!("  {}", plan.constrained));
            ui.message(&format!("  on failure: {}", plan.unconstrained));
            return Ok(CommandResult::success());
        }

        stager.stage(ui)?;
        Ok(CommandResult::success())
    }
}
