//! Config struct definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Free-form values passed into template execution.
///
/// Values keep whatever shape the YAML had (string, number, bool, list, map).
pub type Values = BTreeMap<String, Value>;

/// All templates to render along with the values shared between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Templates in declaration order.
    pub templates: Vec<TemplateConfig>,

    /// Values visible to every render target as `Global`.
    pub global: Values,
}

/// A template file and the outputs rendered from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template path, relative to the config file's directory.
    pub from: String,

    /// Render targets in declaration order.
    pub render: Vec<RenderConfig>,
}

/// A single output file and the values local to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output path, relative to the config file's directory.
    pub to: String,

    /// Values visible only to this target as `Values`.
    pub values: Values,
}
