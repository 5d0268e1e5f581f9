//! Template render engine.
//!
//! Renders every template declared in a [`Config`] to its output files:
//!
//! 1. Load the template once, relative to the config file's directory
//! 2. For each render target:
//!    - create parent directories
//!    - create or truncate the destination file
//!    - write the generated-file header
//!    - execute the template with `{Values, Global}`
//!
//! Templates use Handlebars syntax with HTML escaping disabled and strict
//! mode on, so referencing an undefined value fails the render.
//!
//! # Failure
//!
//! The first failure at any stage aborts the whole run. Files already
//! written stay on disk.

mod header;
mod helpers;


pub use header::{
    AUTOGENERATION_MESSAGE, CommentStyles, UnknownExtension, autogenerated_header, extension_of,
};

use crate::config::{Config, RenderConfig, TemplateConfig};
use crate::error::{InfraError, Result};
use handlebars::Handlebars;
use serde_json::json;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use tracing::{debug, info};

/// A template loaded from disk with helpers registered.
pub struct LoadedTemplate {
    /// File name of the template, used as its registry name.
    pub name: String,
    registry: Handlebars<'static>,
}

impl LoadedTemplate {
    /// Execute the template with `data`, writing to `out`.
    pub fn render_to<W: Write>(&self, data: &serde_json::Value, out: W) -> Result<()> {
        self.registry
            .render_to_write(&self.name, data, out)
            .map_err(|e| {
                InfraError::Template(format!("cannot execute template '{}': {}", self.name, e))
            })
    }
}

/// Renders all templates of one config.
pub struct Renderer<'a> {
    config: &'a Config,
    base_dir: PathBuf,
    styles: &'a CommentStyles,
}

impl<'a> Renderer<'a> {
    /// Create a renderer resolving paths against `base_dir`.
    pub fn new(config: &'a Config, base_dir: impl Into<PathBuf>, styles: &'a CommentStyles) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
            styles,
        }
    }

    /// Render every template in declaration order.
    ///
    /// Returns the paths written, in order.
    pub fn render_all(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.config.target_count());
        for template_config in &self.config.templates {
            let paths = self.render_template(template_config).map_err(|e| {
                InfraError::Template(format!(
                    "cannot render template {}: {}",
                    template_config.from, e
                ))
            })?;
            written.extend(paths);
        }
        Ok(written)
    }

    /// Load one template and render all of its targets.
    pub fn render_template(&self, template_config: &TemplateConfig) -> Result<Vec<PathBuf>> {
        let template = load_template(&self.base_dir, &template_config.from)?;
        debug!(template = %template.name, targets = template_config.render.len(), "loaded template");

        let mut written = Vec::with_capacity(template_config.render.len());
        for render in &template_config.render {
            written.push(self.render_file(&template, render)?);
        }
        Ok(written)
    }

    /// Render one target file from an already loaded template.
    pub fn render_file(&self, template: &LoadedTemplate, render: &RenderConfig) -> Result<PathBuf> {
        let dest_path = self.base_dir.join(&render.to);

        if let Some(parent) = dest_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                InfraError::Template(format!(
                    "cannot create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(&dest_path).map_err(|e| {
            InfraError::Template(format!(
                "cannot create file '{}': {}",
                dest_path.display(),
                e
            ))
        })?;
        let mut out = BufWriter::new(file);

        let sign = self
            .styles
            .comment_sign_for(&dest_path)
            .map_err(|e| InfraError::Template(e.to_string()))?;

        let template_path = header_template_path(&self.base_dir, &template.name);
        header::write_header(&mut out, sign, &template_path).map_err(|e| {
            InfraError::Template(format!(
                "cannot write header to '{}': {}",
                dest_path.display(),
                e
            ))
        })?;

        let data = json!({
            "Values": render.values,
            "Global": self.config.global,
        });
        template.render_to(&data, &mut out)?;

        out.flush().map_err(|e| {
            InfraError::Template(format!("cannot write '{}': {}", dest_path.display(), e))
        })?;

        info!(template = %template.name, to = %dest_path.display(), "rendered file");
        Ok(dest_path)
    }
}

/// Read and parse the template at `base_dir/from`, registering all helpers.
pub fn load_template(base_dir: &Path, from: &str) -> Result<LoadedTemplate> {
    let path = base_dir.join(from);
    let name = Path::new(from)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| InfraError::Template(format!("invalid template path '{}'", from)))?;

    let source = fs::read_to_string(&path).map_err(|e| {
        InfraError::Template(format!(
            "cannot read template '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    helpers::register_all(&mut registry);

    registry
        .register_template_string(&name, source)
        .map_err(|e| {
            InfraError::Template(format!("cannot parse template '{}': {}", path.display(), e))
        })?;

    Ok(LoadedTemplate { name, registry })
}

/// Path shown in the header: `templates/<base dir>/<template file name>`.
pub fn header_template_path(base_dir: &Path, template_name: &str) -> String {
    format!(
        "templates{sep}{}{sep}{}",
        base_dir.display(),
        template_name,
        sep = MAIN_SEPARATOR
    )
}
