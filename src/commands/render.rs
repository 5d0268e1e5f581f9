//! Implementation of the `infra-tools render-templates` command.
//!
//! Loads the templates config, then renders every target in config order.
//! Template and output paths are relative to the directory holding the
//! config file. The first failure stops the run.

use crate::cli::RenderTemplatesArgs;
use crate::config::{Config, base_dir};
use crate::error::Result;
use crate::render::{CommentStyles, Renderer};
use tracing::info;

#[cfg(test)]
mod tests;

/// Execute the `infra-tools render-templates` command.
pub fn cmd_render_templates(args: RenderTemplatesArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let base = base_dir(&args.config);
    info!(
        config = %args.config.display(),
        targets = config.target_count(),
        "rendering templates"
    );

    let styles = CommentStyles::default();
    let written = Renderer::new(&config, &base, &styles).render_all()?;

    println!("Rendered {} file(s) from {}", written.len(), args.config.display());
    Ok(())
}
