//! The stage operation.

use crate::config::StageConfig;
use crate::error::{Result, StageError};
use crate::installer::{InstallConstraints, InstallMode, InstallRequest, Installer};
use crate::layer::LayerLayout;
use crate::ui::{format_duration, UserInterface};
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::{StagePlan, StageReport};

/// Stages one layer from a config and an installer.
pub struct Stager<'a> {
    config: &'a StageConfig,
    installer: &'a dyn Installer,
    base: PathBuf,
}

impl<'a> Stager<'a> {
    /// Stager resolving relative layer paths against `base`.
    ///
    /// `base` must be the directory the installer runs in, so both agree on
    /// where relative paths point.
    pub fn new(
        config: &'a StageConfig,
        installer: &'a dyn Installer,
        base: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            installer,
            base: base.into(),
        }
    }

    /// Layout of the layer being staged.
    pub fn layout(&self) -> LayerLayout {
        LayerLayout::from_config(self.config)
    }

    /// Describe the stage without touching the filesystem.
    pub fn plan(&self) -> StagePlan {
        let site_packages = self.layout().site_packages();
        let constraints = self.constraints();

        StagePlan {
            constrained: self
                .installer
                .describe(&self.constrained_request(&site_packages, &constraints)),
            unconstrained: self
                .installer
                .describe(&self.unconstrained_request(&site_packages)),
            site_packages,
        }
    }

    /// Create the layer directory and install into it.
    ///
    /// The constrained install runs first. Any failure of it, including the
    /// installer not starting, triggers one unconstrained attempt. Failure of
    /// that attempt is returned as the error; nothing is rolled back.
    pub fn stage(&self, ui: &mut dyn UserInterface) -> Result<StageReport> {
        let start = Instant::now();
        let layout = self.layout();
        let site_packages = layout.site_packages();

        layout.ensure(&self.base)?;

        let status = format!(
            "Installing {} into {}",
            self.config.requirements.display(),
            site_packages.display()
        );
        tracing::debug!("{}", status);
        // Default and quiet runs print only the final result line.
        let verbose = ui.output_mode().shows_commands();
        if verbose {
            ui.message(&status);
        }

        let constraints = self.constraints();
        let constrained = self.constrained_request(&site_packages, &constraints);

        let mode = if self.try_constrained(&constrained, verbose, ui) {
            InstallMode::Constrained
        } else {
            let fallback = self.unconstrained_request(&site_packages);
            ui.command(&self.installer.describe(&fallback));

            let outcome = self.installer.install(&fallback)?;
            if !outcome.success {
                tracing::debug!(
                    "Unconstrained install failed with exit code {:?} after {}",
                    outcome.exit_code,
                    format_duration(outcome.duration)
                );
                return Err(StageError::InstallFailed {
                    command: outcome.command,
                    code: outcome.exit_code,
                });
            }
            InstallMode::Unconstrained
        };

        let report = StageReport {
            site_packages,
            mode,
            duration: start.elapsed(),
        };

        tracing::debug!(
            "Staged {} ({} install, {})",
            report.site_packages.display(),
            report.mode,
            format_duration(report.duration)
        );
        ui.success(&format!(
            "Dependencies installed to {}",
            report.site_packages.display()
        ));

        Ok(report)
    }

    /// Run the constrained attempt; `true` if it succeeded.
    ///
    /// Failures are shown to the user only in verbose mode.
    fn try_constrained(
        &self,
        request: &InstallRequest<'_>,
        verbose: bool,
        ui: &mut dyn UserInterface,
    ) -> bool {
        ui.command(&self.installer.describe(request));

        let failed = match self.installer.install(request) {
            Ok(outcome) if outcome.success => return true,
            Ok(outcome) => format!(
                "exited with code {:?} after {}",
                outcome.exit_code,
                format_duration(outcome.duration)
            ),
            Err(e) => format!("could not run: {}", e),
        };

        tracing::debug!("Constrained install {}, retrying without platform constraints", failed);
        if verbose {
            ui.warning("Platform-constrained install failed, retrying for the native platform");
        }
        false
    }

    fn constraints(&self) -> InstallConstraints {
        InstallConstraints::from_settings(&self.config.installer, &self.config.runtime)
    }

    fn constrained_request<'r>(
        &'r self,
        site_packages: &'r Path,
        constraints: &'r InstallConstraints,
    ) -> InstallRequest<'r> {
        InstallRequest {
            requirements: &self.config.requirements,
            target: site_packages,
            constraints: Some(constraints),
            upgrade: self.config.installer.upgrade,
        }
    }

    fn unconstrained_request<'r>(&'r self, site_packages: &'r Path) -> InstallRequest<'r> {
        InstallRequest {
            requirements: &self.config.requirements,
            target: site_packages,
            constraints: None,
            upgrade: false,
        }
    }
}
