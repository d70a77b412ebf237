//! Layer staging.
//!
//! [`Stager`] runs the whole operation: create the layer directory, try a
//! constrained install, fall back to an unconstrained one, and report.
//!
//! # Example
//!
//! ```
//! use layerstage::config::StageConfig;
//! use layerstage::installer::PipInstaller;
//! use layerstage::stager::Stager;
//!
//! let config = StageConfig::default();
//! let pip = PipInstaller::from_settings(&config.installer);
//! let plan = Stager::new(&config, &pip, ".").plan();
//!
//! assert_eq!(
//!     plan.site_packages,
//!     std::path::PathBuf::from("src/python_deps/python/lib/python3.11/site-packages")
//! );
//! assert!(plan.constrained.contains("--platform manylinux2014_x86_64"));
//! assert!(!plan.unconstrained.contains("--platform"));
//! ```

pub mod report;
pub mod stage;

pub use report::{StagePlan, StageReport};
pub use stage::Stager;
