//! layerstage - Stage Python dependencies into a serverless layer directory.
//!
//! The layer format expects packages under
//! `<layer>/python/lib/<runtime>/site-packages`. layerstage creates that
//! tree, installs a requirements manifest into it for the deployment
//! platform (falling back to the local platform when no matching wheels
//! exist), and reports where the packages went.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, overrides, and validation
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Installer capability and the pip implementation
//! - [`layer`] - Layer directory layout
//! - [`shell`] - External process execution
//! - [`stager`] - The stage operation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use layerstage::layer::LayerLayout;
//!
//! let layout = LayerLayout::new("src/python_deps", "python3.11");
//! assert_eq!(
//!     layout.site_packages(),
//!     std::path::PathBuf::from("src/python_deps/python/lib/python3.11/site-packages")
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod layer;
pub mod shell;
pub mod stager;
pub mod ui;

pub use error::{Result, StageError};
