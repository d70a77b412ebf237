//! Configuration validation.
//!
//! Only structural emptiness is checked here. The runtime identifier and
//! constraint tags are passed to the installer as-is, which reports its own
//! errors for values it does not recognise.

use crate::config::schema::StageConfig;
use crate::error::{Result, StageError};

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the problem belongs to.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Collect all validation problems in a config.
pub fn validate_config(config: &StageConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.runtime.trim().is_empty() {
        errors.push(ValidationError::new("runtime", "runtime must not be empty"));
    }

    if config.layer_dir.as_os_str().is_empty() {
        errors.push(ValidationError::new("layer_dir", "layer_dir must not be empty"));
    }

    if config.requirements.as_os_str().is_empty() {
        errors.push(ValidationError::new("requirements", "requirements must not be empty"));
    }

    match config.installer.command.first() {
        Some(program) if !program.trim().is_empty() => {}
        _ => errors.push(ValidationError::new(
            "installer.command",
            "installer.command must name a program",
        )),
    }

    errors
}

/// Validate a config, failing with every problem joined into one message.
pub fn validate(config: &StageConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(StageError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
