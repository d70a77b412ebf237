//! Layer directory layout.
//!
//! The deployment platform loads Python layers from
//! `python/lib/<runtime>/site-packages` inside the layer archive, so the
//! staged tree mirrors that path under the configured layer directory.

use crate::config::StageConfig;
use crate::error::{Result, StageError};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed segments between the layer root and the runtime directory.
const RUNTIME_PARENT: [&str; 2] = ["python", "lib"];

/// Leaf directory the installer writes into.
const SITE_PACKAGES: &str = "site-packages";

/// Path template for one staged layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerLayout {
    root: PathBuf,
    runtime: String,
}

impl LayerLayout {
    /// Layout rooted at `root` for the given runtime identifier.
    pub fn new(root: impl Into<PathBuf>, runtime: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            runtime: runtime.into(),
        }
    }

    /// Layout described by a config.
    pub fn from_config(config: &StageConfig) -> Self {
        Self::new(&config.layer_dir, &config.runtime)
    }

    /// The layer root as configured.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The runtime identifier.
    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    /// `<root>/python/lib/<runtime>/site-packages`.
    pub fn site_packages(&self) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(RUNTIME_PARENT);
        path.push(&self.runtime);
        path.push(SITE_PACKAGES);
        path
    }

    /// Create the site-packages directory and any missing ancestors.
    ///
    /// Relative roots are resolved against `base`. An existing directory is
    /// left as it is. Returns the created (or existing) path.
    pub fn ensure(&self, base: &Path) -> Result<PathBuf> {
        let path = base.join(self.site_packages());

        fs::create_dir_all(&path).map_err(|source| StageError::LayoutCreateFailed {
            path: self.site_packages(),
            source,
        })?;

        tracing::debug!("Layer directory ready at {}", path.display());
        Ok(path)
    }
}
