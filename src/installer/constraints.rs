//! Cross-platform install constraints.

use crate::config::InstallerSettings;
use regex::Regex;
use std::sync::LazyLock;

/// Matches runtime identifiers such as `python3.11`.
static RUNTIME_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^python(\d+)\.(\d+)$").expect("RUNTIME_VERSION_REGEX must compile")
});

/// Platform, version and implementation restrictions for the first install
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConstraints {
    /// Target platform tag, e.g. `manylinux2014_x86_64`.
    pub platform: String,
    /// Target Python version without the dot, e.g. `311`.
    pub python_version: String,
    /// Binary implementation tag, e.g. `cp`.
    pub implementation: String,
    /// Accept only prebuilt wheels.
    pub only_binary: bool,
}

impl InstallConstraints {
    /// Constraints from installer settings, deriving the Python version from
    /// `runtime` when the settings leave it unset.
    pub fn from_settings(settings: &InstallerSettings, runtime: &str) -> Self {
        let python_version = settings
            .python_version
            .clone()
            .unwrap_or_else(|| derive_python_version(runtime));

        Self {
            platform: settings.platform.clone(),
            python_version,
            implementation: settings.implementation.clone(),
            only_binary: settings.only_binary,
        }
    }

    /// Installer flags expressing these constraints.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--platform".to_string(),
            self.platform.clone(),
            "--python-version".to_string(),
            self.python_version.clone(),
            "--implementation".to_string(),
            self.implementation.clone(),
        ];
        if self.only_binary {
            args.push("--only-binary=:all:".to_string());
        }
        args
    }
}

/// Installer version flag for a runtime identifier.
///
/// `python3.11` becomes `311`. Anything else is returned unchanged.
pub fn derive_python_version(runtime: &str) -> String {
    match RUNTIME_VERSION_REGEX.captures(runtime) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => runtime.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_version_from_runtime() {
        assert_eq!(derive_python_version("python3.11"), "311");
        assert_eq!(derive_python_version("python3.9"), "39");
        assert_eq!(derive_python_version("python3.12"), "312");
    }

    #[test]
    fn unrecognised_runtime_passes_through() {
        assert_eq!(derive_python_version("nodejs20.x"), "nodejs20.x");
        assert_eq!(derive_python_version("python3"), "python3");
    }

    #[test]
    fn explicit_version_wins_over_derivation() {
        let settings = InstallerSettings {
            python_version: Some("310".to_string()),
            ..Default::default()
        };
        let constraints = InstallConstraints::from_settings(&settings, "python3.11");
        assert_eq!(constraints.python_version, "310");
    }

    #[test]
    fn default_settings_produce_stock_flags() {
        let constraints =
            InstallConstraints::from_settings(&InstallerSettings::default(), "python3.11");
        assert_eq!(
            constraints.to_args(),
            vec![
                "--platform",
                "manylinux2014_x86_64",
                "--python-version",
                "311",
                "--implementation",
                "cp",
                "--only-binary=:all:",
            ]
        );
    }

    #[test]
    fn only_binary_can_be_disabled() {
        let settings = InstallerSettings {
            only_binary: false,
            ..Default::default()
        };
        let args = InstallConstraints::from_settings(&settings, "python3.11").to_args();
        assert!(!args.iter().any(|a| a.starts_with("--only-binary")));
    }
}
