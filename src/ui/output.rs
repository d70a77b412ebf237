//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status messages plus the commands being run.
    Verbose,
    /// Status messages.
    #[default]
    Normal,
    /// Only the final result and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows the commands being run.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows intermediate status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
