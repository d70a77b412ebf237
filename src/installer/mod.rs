//! Package installer capability.
//!
//! The stager never spawns processes itself; it talks to an [`Installer`].
//! [`PipInstaller`] is the production implementation, and tests substitute
//! their own.
//!
//! # Example
//!
//! ```
//! use layerstage::installer::{InstallConstraints, InstallRequest, Installer, PipInstaller};
//! use layerstage::config::InstallerSettings;
//! use std::path::Path;
//!
//! let pip = PipInstaller::new(vec!["pip".to_string()]);
//! let constraints = InstallConstraints::from_settings(&InstallerSettings::default(), "python3.11");
//! let request = InstallRequest {
//!     requirements: Path::new("requirements.txt"),
//!     target: Path::new("layer/python/lib/python3.11/site-packages"),
//!     constraints: Some(&constraints),
//!     upgrade: true,
//! };
//!
//! let line = pip.describe(&request);
//! assert!(line.starts_with("pip install -r requirements.txt"));
//! assert!(line.contains("--python-version 311"));
//! ```

pub mod constraints;
pub mod pip;

pub use constraints::{derive_python_version, InstallConstraints};
pub use pip::PipInstaller;

use crate::error::Result;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Which of the two install attempts is being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Restricted to a target platform, version and implementation.
    Constrained,
    /// Native platform of the invoking environment.
    Unconstrained,
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constrained => write!(f, "constrained"),
            Self::Unconstrained => write!(f, "unconstrained"),
        }
    }
}

/// One install invocation.
#[derive(Debug, Clone, Copy)]
pub struct InstallRequest<'a> {
    /// Requirements manifest.
    pub requirements: &'a Path,
    /// Directory the installer writes packages into.
    pub target: &'a Path,
    /// Platform restrictions; `None` for an unconstrained install.
    pub constraints: Option<&'a InstallConstraints>,
    /// Replace packages already present in `target`.
    pub upgrade: bool,
}

impl InstallRequest<'_> {
    /// The attempt kind this request represents.
    pub fn mode(&self) -> InstallMode {
        if self.constraints.is_some() {
            InstallMode::Constrained
        } else {
            InstallMode::Unconstrained
        }
    }
}

/// How an install invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Rendered command line that was run.
    pub command: String,
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
    /// Whether the installer exited with status 0.
    pub success: bool,
    /// Wall-clock time of the invocation.
    pub duration: Duration,
}

/// Something that can install a requirements manifest into a directory.
pub trait Installer {
    /// Command line that [`install`](Installer::install) would run.
    fn describe(&self, request: &InstallRequest<'_>) -> String;

    /// Run the installer and wait for it to finish.
    ///
    /// A non-zero exit is an `Ok` outcome with `success == false`; `Err` is
    /// returned only when the installer could not be started.
    fn install(&self, request: &InstallRequest<'_>) -> Result<InstallOutcome>;
}
