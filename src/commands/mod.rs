//! Command implementations for infra-tools.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod clean_firewall;
mod render;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::RenderTemplates(args) => render::cmd_render_templates(args),
        Command::CleanFirewall(args) => clean_firewall::cmd_clean_firewall(args),
    }
}
