//! Command-line interface for wxyc-live.
//!
//! Follows the live playlist in the terminal, or runs one-off playlist and
//! artwork lookups.

mod commands;

pub use commands::{AppContext, Cli, Commands, run_command};
