//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// layerstage - Stage Python dependencies into a serverless layer directory.
#[derive(Debug, Parser)]
#[command(name = "layerstage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./layerstage.yml)
    #[arg(short, long, global = true, env = "LAYERSTAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show the installer commands being run
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub layer: LayerArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the layer directory and install dependencies (default)
    Stage(StageArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Layer settings that override the config file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LayerArgs {
    /// Base directory of the layer [default: src/python_deps]
    #[arg(long, global = true, env = "LAYERSTAGE_LAYER_DIR", value_name = "DIR")]
    pub layer_dir: Option<PathBuf>,

    /// Runtime identifier [default: python3.11]
    #[arg(long, global = true, env = "LAYERSTAGE_RUNTIME", value_name = "RUNTIME")]
    pub runtime: Option<String>,

    /// Requirements manifest [default: requirements.txt]
    #[arg(long, global = true, env = "LAYERSTAGE_REQUIREMENTS", value_name = "FILE")]
    pub requirements: Option<PathBuf>,

    /// Target platform tag for the constrained install
    #[arg(long, global = true, env = "LAYERSTAGE_PLATFORM", value_name = "TAG")]
    pub platform: Option<String>,

    /// Target Python version for the constrained install (e.g. 311)
    #[arg(long, global = true, env = "LAYERSTAGE_PYTHON_VERSION", value_name = "VERSION")]
    pub python_version: Option<String>,

    /// Implementation tag for the constrained install
    #[arg(long, global = true, env = "LAYERSTAGE_IMPLEMENTATION", value_name = "TAG")]
    pub implementation: Option<String>,

    /// Installer command line (e.g. "python3.11 -m pip")
    ///
    /// Split on whitespace. For a program path containing spaces, set
    /// `installer.command` as a list in layerstage.yml instead.
    #[arg(long, global = true, env = "LAYERSTAGE_INSTALLER", value_name = "COMMAND")]
    pub installer: Option<String>,
}

impl LayerArgs {
    /// Overrides to apply on top of the loaded config.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            layer_dir: self.layer_dir.clone(),
            runtime: self.runtime.clone(),
            requirements: self.requirements.clone(),
            platform: self.platform.clone(),
            python_version: self.python_version.clone(),
            implementation: self.implementation.clone(),
            installer: self.installer.clone(),
        }
    }
}

/// Arguments for the `stage` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StageArgs {
    /// Print the installer commands without creating or installing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_default_stage() {
        let cli = Cli::try_parse_from(["layerstage"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.layer.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn layer_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "layerstage",
            "--runtime",
            "python3.12",
            "--layer-dir",
            "build/layer",
            "--installer",
            "python3.12 -m pip",
        ])
        .unwrap();

        let overrides = cli.layer.overrides();
        assert_eq!(overrides.runtime.as_deref(), Some("python3.12"));
        assert_eq!(overrides.layer_dir, Some(PathBuf::from("build/layer")));
        assert_eq!(overrides.installer.as_deref(), Some("python3.12 -m pip"));
    }

    #[test]
    fn layer_flags_are_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["layerstage", "stage", "--dry-run", "--platform", "x"])
            .unwrap();

        assert!(matches!(cli.command, Some(Commands::Stage(ref a)) if a.dry_run));
        assert_eq!(cli.layer.platform.as_deref(), Some("x"));
    }

    #[test]
    fn config_accepts_json_flag() {
        let cli = Cli::try_parse_from(["layerstage", "config", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config(ConfigArgs { json: true }))));
    }
}
