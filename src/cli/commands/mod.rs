//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed to by
//! [`CommandDispatcher`]. Running the binary without a subcommand stages
//! the layer.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod stage;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
