//! Render configuration model.
//!
//! This module defines the structs that represent a `rendertemplates` YAML
//! file: a list of templates, each with its render targets, plus a `global`
//! mapping shared by every render. Unknown fields are ignored.

mod model;
mod operations;


pub use model::{Config, RenderConfig, TemplateConfig, Values};
pub use operations::base_dir;
