//! Stage results.

use crate::installer::InstallMode;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a successful stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// The populated site-packages directory, as configured.
    pub site_packages: PathBuf,
    /// Which install attempt succeeded.
    pub mode: InstallMode,
    /// Total time including directory creation and both attempts.
    pub duration: Duration,
}

impl StageReport {
    /// Whether the constrained attempt failed and the fallback was used.
    pub fn used_fallback(&self) -> bool {
        self.mode == InstallMode::Unconstrained
    }
}

/// What a stage would do, without doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePlan {
    /// Directory that would be created and populated.
    pub site_packages: PathBuf,
    /// Command line of the constrained attempt.
    pub constrained: String,
    /// Command line of the fallback attempt.
    pub unconstrained: String,
}
