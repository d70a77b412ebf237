//! Command-line overrides layered on top of file configuration.

use crate::config::schema::StageConfig;
use std::path::PathBuf;

/// Values supplied on the command line or through `LAYERSTAGE_*` variables.
///
/// `None` leaves the file (or default) value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub layer_dir: Option<PathBuf>,
    pub runtime: Option<String>,
    pub requirements: Option<PathBuf>,
    pub platform: Option<String>,
    pub python_version: Option<String>,
    pub implementation: Option<String>,
    /// Installer command line, split on whitespace. Arguments containing
    /// spaces cannot be expressed here; `installer.command` in the config
    /// file takes a list.
    pub installer: Option<String>,
}

impl ConfigOverrides {
    /// Apply every set override to `config`.
    pub fn apply(&self, config: &mut StageConfig) {
        if let Some(layer_dir) = &self.layer_dir {
            config.layer_dir = layer_dir.clone();
        }
        if let Some(runtime) = &self.runtime {
            config.runtime = runtime.clone();
        }
        if let Some(requirements) = &self.requirements {
            config.requirements = requirements.clone();
        }
        if let Some(platform) = &self.platform {
            config.installer.platform = platform.clone();
        }
        if let Some(version) = &self.python_version {
            config.installer.python_version = Some(version.clone());
        }
        if let Some(implementation) = &self.implementation {
            config.installer.implementation = implementation.clone();
        }
        if let Some(installer) = &self.installer {
            config.installer.command = installer.split_whitespace().map(String::from).collect();
        }
    }
}
