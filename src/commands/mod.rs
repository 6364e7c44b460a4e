//! Command implementations for navbar.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod render;
mod sample;
mod validate;

use crate::cli::Command;
use navbar::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Validate(args) => validate::cmd_validate(args),
        Command::Sample(args) => sample::cmd_sample(args),
    }
}
