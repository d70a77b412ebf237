//! Library integration tests.

use layerstage::config::{load_config, validate, ConfigOverrides, StageConfig};
use layerstage::installer::{InstallMode, InstallOutcome, InstallRequest, Installer};
use layerstage::stager::Stager;
use layerstage::ui::MockUI;
use layerstage::StageError;
use std::cell::Cell;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

/// Installer that fails a fixed number of times before succeeding.
struct FlakyInstaller {
    failures_left: Cell<u32>,
}

impl Installer for FlakyInstaller {
    fn describe(&self, request: &InstallRequest<'_>) -> String {
        format!("flaky {}", request.mode())
    }

    fn install(&self, request: &InstallRequest<'_>) -> layerstage::Result<InstallOutcome> {
        let failing = self.failures_left.get() > 0;
        if failing {
            self.failures_left.set(self.failures_left.get() - 1);
        }
        Ok(InstallOutcome {
            command: self.describe(request),
            exit_code: Some(if failing { 1 } else { 0 }),
            success: !failing,
            duration: Duration::ZERO,
        })
    }
}

#[test]
fn error_types_are_public() {
    let err = StageError::InstallFailed {
        command: "pip install".into(),
        code: Some(1),
    };
    assert!(err.to_string().contains("pip install"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> layerstage::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use layerstage::cli::{Cli, Commands};

    let cli = Cli::parse_from(["layerstage", "stage", "--dry-run"]);

    if let Some(Commands::Stage(args)) = cli.command {
        assert!(args.dry_run);
    } else {
        panic!("Expected Stage command");
    }
}

#[test]
fn custom_installer_drives_fallback() {
    let temp = TempDir::new().unwrap();
    let config = StageConfig::default();
    let installer = FlakyInstaller {
        failures_left: Cell::new(1),
    };
    let mut ui = MockUI::new();

    let report = Stager::new(&config, &installer, temp.path())
        .stage(&mut ui)
        .unwrap();

    assert_eq!(report.mode, InstallMode::Unconstrained);
    assert_eq!(ui.successes().len(), 1);
}

#[test]
fn exhausted_fallback_reports_failure() {
    let temp = TempDir::new().unwrap();
    let config = StageConfig::default();
    let installer = FlakyInstaller {
        failures_left: Cell::new(2),
    };
    let mut ui = MockUI::new();

    let err = Stager::new(&config, &installer, temp.path())
        .stage(&mut ui)
        .unwrap_err();

    assert!(matches!(err, StageError::InstallFailed { code: Some(1), .. }));
    assert!(ui.successes().is_empty());
    assert!(temp
        .path()
        .join("src/python_deps/python/lib/python3.11/site-packages")
        .is_dir());
}

#[test]
fn file_config_and_overrides_combine() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("layerstage.yml"),
        "requirements: deps/requirements.txt\ninstaller:\n  platform: manylinux2014_aarch64\n",
    )
    .unwrap();

    let mut config = load_config(temp.path(), None).unwrap();
    ConfigOverrides {
        runtime: Some("python3.12".to_string()),
        ..Default::default()
    }
    .apply(&mut config);
    validate(&config).unwrap();

    assert_eq!(
        config.requirements,
        std::path::PathBuf::from("deps/requirements.txt")
    );
    assert_eq!(config.installer.platform, "manylinux2014_aarch64");
    assert_eq!(config.runtime, "python3.12");
}
