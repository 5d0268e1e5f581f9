//! Generated-file header and comment-token lookup.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Marker sentence placed at the top of every rendered file.
pub const AUTOGENERATION_MESSAGE: &str = "Code generated by rendertemplates. DO NOT EDIT.";

/// No comment token is registered for an extension.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot add autogenerated header comment: unknown comment sign for {0:?} file extension")]
pub struct UnknownExtension(pub String);

/// Registry of line-comment tokens by file extension.
///
/// Maps a comment token to the extensions (with leading dot) whose languages
/// use it. Built once at startup and passed into the renderer.
#[derive(Debug, Clone)]
pub struct CommentStyles {
    by_token: BTreeMap<String, BTreeSet<String>>,
}

impl Default for CommentStyles {
    fn default() -> Self {
        Self::empty()
            .with_extension("//", ".go")
            .with_extension("#", ".yaml")
            .with_extension("#", ".yml")
    }
}

impl CommentStyles {
    /// A registry with no extensions.
    pub fn empty() -> Self {
        Self {
            by_token: BTreeMap::new(),
        }
    }

    /// Register `extension` (e.g. `.sh`) as using `token`.
    pub fn with_extension(mut self, token: &str, extension: &str) -> Self {
        self.by_token
            .entry(token.to_string())
            .or_default()
            .insert(extension.to_string());
        self
    }

    /// Resolve the comment token for an extension such as `.go`.
    pub fn comment_sign(&self, extension: &str) -> Result<&str, UnknownExtension> {
        self.by_token
            .iter()
            .find(|(_, extensions)| extensions.contains(extension))
            .map(|(token, _)| token.as_str())
            .ok_or_else(|| UnknownExtension(extension.to_string()))
    }

    /// Resolve the comment token for the extension of `path`.
    pub fn comment_sign_for(&self, path: &Path) -> Result<&str, UnknownExtension> {
        self.comment_sign(&extension_of(path))
    }
}

/// Extension of `path` including the leading dot, or `""` when there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Build the two-line header pointing back at `template_path`.
pub fn autogenerated_header(sign: &str, template_path: &str) -> String {
    format!(
        "{sign} {AUTOGENERATION_MESSAGE} \n{sign} Edit template instead: {template_path}\n\n"
    )
}

/// Write the header to `out`.
pub fn write_header<W: Write>(out: &mut W, sign: &str, template_path: &str) -> std::io::Result<()> {
    out.write_all(autogenerated_header(sign, template_path).as_bytes())
}
