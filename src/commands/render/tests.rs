//! Tests for the render-templates command.

use super::*;
use crate::error::InfraError;
use crate::exit_codes;
use crate::test_support::{DirGuard, write_file};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

const CONFIG: &str = r#"
templates:
  - from: templates/job.yaml
    render:
      - to: jobs/director.yaml
        values:
          component: director
global:
  image: buildpack-golang
"#;

#[test]
#[serial]
fn test_renders_relative_to_config_dir() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "ci/config.yaml", CONFIG);
    write_file(
        root,
        "ci/templates/job.yaml",
        "name: {{Values.component}}\nimage: {{Global.image}}\n",
    );
    let _guard = DirGuard::new(root);

    cmd_render_templates(RenderTemplatesArgs {
        config: PathBuf::from("ci/config.yaml"),
    })
    .unwrap();

    let rendered = std::fs::read_to_string(root.join("ci/jobs/director.yaml")).unwrap();
    let sep = std::path::MAIN_SEPARATOR;
    assert!(rendered.starts_with("# Code generated by rendertemplates. DO NOT EDIT. \n"));
    assert!(rendered.contains(&format!("# Edit template instead: templates{sep}ci{sep}job.yaml\n")));
    assert!(rendered.ends_with("name: director\nimage: buildpack-golang\n"));
}

#[test]
#[serial]
fn test_config_in_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(
        root,
        "config.yaml",
        "templates:\n  - from: t.yaml\n    render:\n      - to: out.yaml\n",
    );
    write_file(root, "t.yaml", "ok\n");
    let _guard = DirGuard::new(root);

    cmd_render_templates(RenderTemplatesArgs {
        config: PathBuf::from("config.yaml"),
    })
    .unwrap();

    let rendered = std::fs::read_to_string(root.join("out.yaml")).unwrap();
    let sep = std::path::MAIN_SEPARATOR;
    assert!(rendered.contains(&format!("templates{sep}.{sep}t.yaml")));
}

#[test]
fn test_missing_config_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = cmd_render_templates(RenderTemplatesArgs {
        config: temp_dir.path().join("missing.yaml"),
    })
    .unwrap_err();

    assert!(matches!(err, InfraError::Config(_)));
    assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
}

#[test]
fn test_render_failure_is_template_error() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "config.yaml", CONFIG);

    let err = cmd_render_templates(RenderTemplatesArgs {
        config: temp_dir.path().join("config.yaml"),
    })
    .unwrap_err();

    assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    assert!(!temp_dir.path().join("jobs/director.yaml").exists());
}
