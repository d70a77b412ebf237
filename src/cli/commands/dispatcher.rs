//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, StageArgs};
use crate::config::{load_config, validate, StageConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Process exit status for this result.
    ///
    /// Codes outside 1..=255 on a failed result become 1.
    pub fn exit_status(&self) -> u8 {
        if self.success {
            return 0;
        }
        u8::try_from(self.exit_code)
            .ok()
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the config file, apply command-line overrides, and validate.
    pub fn resolve_config(&self, cli: &Cli) -> Result<StageConfig> {
        let mut config = load_config(&self.project_root, cli.config.as_deref())?;
        cli.layer.overrides().apply(&mut config);
        validate(&config)?;
        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, stages the layer with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Stage(args)) => {
                let config = self.resolve_config(cli)?;
                let cmd =
                    super::stage::StageCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let config = self.resolve_config(cli)?;
                let cmd = super::config::ConfigCommand::new(config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let config = self.resolve_config(cli)?;
                let cmd = super::stage::StageCommand::new(
                    &self.project_root,
                    config,
                    StageArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
