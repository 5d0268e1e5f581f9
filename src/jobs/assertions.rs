//! Structural assertions on a single job.

use super::presets::{BUILD_SCRIPT, TEST_INFRA_ORG, TEST_INFRA_PATH_ALIAS, TEST_INFRA_REPO};
use super::types::{JobBase, Postsubmit, Presubmit};
use thiserror::Error;

/// A job property that does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobAssertionError {
    #[error("job '{job}' does not enable preset '{preset}'")]
    MissingPreset { job: String, preset: String },

    #[error("job '{job}' has no test-infra extra ref on '{base_ref}'")]
    MissingTestInfraRef { job: String, base_ref: String },

    #[error("job '{job}' does not run on changes to '{path}' (run_if_changed: '{pattern}')")]
    NotTriggeredBy {
        job: String,
        path: String,
        pattern: String,
    },

    #[error("job '{job}' must have exactly one container, found {count}")]
    ContainerCount { job: String, count: usize },

    #[error("job '{job}' uses image '{actual}', expected '{expected}'")]
    Image {
        job: String,
        expected: String,
        actual: String,
    },

    #[error("job '{job}' runs `{actual}`, expected `{expected}`")]
    Command {
        job: String,
        expected: String,
        actual: String,
    },
}

/// Every preset label in `presets` is set to `"true"` on the job.
pub fn assert_has_presets(job: &JobBase, presets: &[&str]) -> Result<(), JobAssertionError> {
    for preset in presets {
        if job.labels.get(*preset).map(String::as_str) != Some("true") {
            return Err(JobAssertionError::MissingPreset {
                job: job.name.clone(),
                preset: preset.to_string(),
            });
        }
    }
    Ok(())
}

/// The job checks out test-infra at `base_ref` under its canonical path.
pub fn assert_has_extra_ref_test_infra(
    job: &JobBase,
    base_ref: &str,
) -> Result<(), JobAssertionError> {
    let found = job.extra_refs.iter().any(|r| {
        r.org == TEST_INFRA_ORG
            && r.repo == TEST_INFRA_REPO
            && r.base_ref == base_ref
            && r.path_alias == TEST_INFRA_PATH_ALIAS
    });

    if found {
        Ok(())
    } else {
        Err(JobAssertionError::MissingTestInfraRef {
            job: job.name.clone(),
            base_ref: base_ref.to_string(),
        })
    }
}

/// A change to `path` triggers the presubmit.
pub fn assert_presubmit_runs_if_changed(
    job: &Presubmit,
    path: &str,
) -> Result<(), JobAssertionError> {
    if job.runs_against_changes(path) {
        return Ok(());
    }
    Err(not_triggered(&job.base, path, &job.run_if_changed))
}

/// A change to `path` triggers the postsubmit.
pub fn assert_postsubmit_runs_if_changed(
    job: &Postsubmit,
    path: &str,
) -> Result<(), JobAssertionError> {
    if job.runs_against_changes(path) {
        return Ok(());
    }
    Err(not_triggered(&job.base, path, &job.run_if_changed))
}

fn not_triggered(job: &JobBase, path: &str, pattern: &str) -> JobAssertionError {
    JobAssertionError::NotTriggeredBy {
        job: job.name.clone(),
        path: path.to_string(),
        pattern: pattern.to_string(),
    }
}

/// The job runs the buildpack build script in `image` with `args`.
pub fn assert_exec_golang_buildpack(
    job: &JobBase,
    image: &str,
    args: &[&str],
) -> Result<(), JobAssertionError> {
    let containers = job
        .spec
        .as_ref()
        .map(|spec| spec.containers.as_slice())
        .unwrap_or_default();

    let [container] = containers else {
        return Err(JobAssertionError::ContainerCount {
            job: job.name.clone(),
            count: containers.len(),
        });
    };

    if container.image != image {
        return Err(JobAssertionError::Image {
            job: job.name.clone(),
            expected: image.to_string(),
            actual: container.image.clone(),
        });
    }

    let expected: Vec<&str> = std::iter::once(BUILD_SCRIPT).chain(args.iter().copied()).collect();
    let actual: Vec<&str> = container
        .command
        .iter()
        .chain(container.args.iter())
        .map(String::as_str)
        .collect();

    if actual != expected {
        return Err(JobAssertionError::Command {
            job: job.name.clone(),
            expected: shell_words::join(&expected),
            actual: shell_words::join(&actual),
        });
    }

    Ok(())
}
