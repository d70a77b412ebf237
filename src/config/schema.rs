//! Configuration schema definitions.
//!
//! Every field has a default, so an empty or missing `layerstage.yml`
//! yields the stock layer configuration:
//!
//! ```yaml
//! layer_dir: src/python_deps
//! runtime: python3.11
//! requirements: requirements.txt
//! installer:
//!   command: [pip]
//!   platform: manylinux2014_x86_64
//!   implementation: cp
//!   only_binary: true
//!   upgrade: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default base output directory for the layer.
pub const DEFAULT_LAYER_DIR: &str = "src/python_deps";

/// Default runtime identifier.
pub const DEFAULT_RUNTIME: &str = "python3.11";

/// Default requirements manifest.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Default target platform tag for the constrained install.
pub const DEFAULT_PLATFORM: &str = "manylinux2014_x86_64";

/// Default binary implementation tag for the constrained install.
pub const DEFAULT_IMPLEMENTATION: &str = "cp";

/// Root configuration for a staging run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageConfig {
    /// Base directory under which the layer tree is created.
    pub layer_dir: PathBuf,

    /// Runtime identifier, e.g. `python3.11`.
    pub runtime: String,

    /// Requirements manifest handed to the installer.
    pub requirements: PathBuf,

    /// Installer invocation settings.
    pub installer: InstallerSettings,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            layer_dir: PathBuf::from(DEFAULT_LAYER_DIR),
            runtime: DEFAULT_RUNTIME.to_string(),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            installer: InstallerSettings::default(),
        }
    }
}

/// How the package installer is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerSettings {
    /// Program and leading arguments, e.g. `[python3.11, -m, pip]`.
    pub command: Vec<String>,

    /// Target platform tag for the constrained attempt.
    pub platform: String,

    /// Target Python version (`311`). Derived from `runtime` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,

    /// Binary implementation tag for the constrained attempt.
    pub implementation: String,

    /// Restrict the constrained attempt to prebuilt wheels.
    pub only_binary: bool,

    /// Replace already-installed packages in the target directory.
    pub upgrade: bool,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            command: vec!["pip".to_string()],
            platform: DEFAULT_PLATFORM.to_string(),
            python_version: None,
            implementation: DEFAULT_IMPLEMENTATION.to_string(),
            only_binary: true,
            upgrade: true,
        }
    }
}
