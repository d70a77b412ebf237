//! Config command implementation.
//!
//! The `layerstage config` command shows the resolved configuration, after
//! the config file and command-line overrides have been applied.

use crate::cli::args::ConfigArgs;
use crate::config::StageConfig;
use crate::error::{Result, StageError};
use crate::installer::InstallConstraints;
use crate::layer::LayerLayout;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    config: StageConfig,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config: StageConfig, args: ConfigArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    /// Config with the derived Python version filled in.
    fn effective(&self) -> StageConfig {
        let mut config = self.config.clone();
        let constraints = InstallConstraints::from_settings(&config.installer, &config.runtime);
        config.installer.python_version = Some(constraints.python_version);
        config
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.effective();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| StageError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&config).map_err(|e| StageError::Other(e.into()))?;
            ui.message(&format!(
                "# site-packages: {}",
                LayerLayout::from_config(&config).site_packages().display()
            ));
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}
