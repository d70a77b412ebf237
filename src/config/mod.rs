//! Configuration loading, overriding, and validation.
//!
//! - Schema definitions and defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Command-line overrides in [`overrides`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use layerstage::config::{load_config, validate, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("layerstage.yml"), "runtime: python3.12").unwrap();
//!
//! let mut config = load_config(temp.path(), None).unwrap();
//! ConfigOverrides {
//!     layer_dir: Some("build/layer".into()),
//!     ..Default::default()
//! }
//! .apply(&mut config);
//! validate(&config).unwrap();
//!
//! assert_eq!(config.runtime, "python3.12");
//! assert_eq!(config.layer_dir, std::path::PathBuf::from("build/layer"));
//! ```

pub mod loader;
pub mod overrides;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use overrides::ConfigOverrides;
pub use schema::{InstallerSettings, StageConfig};
pub use validator::{validate, validate_config, ValidationError};
