//! Config loading and path helpers.

use super::model::Config;
use crate::error::{InfraError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded config
    /// * `Err(InfraError::Config)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            InfraError::Config(format!(
                "cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields an empty config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| InfraError::Config(format!("cannot parse config yaml: {}", e)))
    }

    /// Number of files a full render pass will write.
    pub fn target_count(&self) -> usize {
        self.templates.iter().map(|t| t.render.len()).sum()
    }
}

/// Directory that template and output paths are resolved against.
///
/// A bare file name resolves to `.`.
pub fn base_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
