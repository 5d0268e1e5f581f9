//! Assertions over generated Prow job definitions.
//!
//! Job files are produced by the template renderer; these helpers load them
//! back and check the properties each job is expected to have. Every
//! assertion returns a [`JobAssertionError`] describing the first property
//! that does not hold, so callers can `unwrap()` in tests or report it.
//!
//! ```no_run
//! use infra_tools::jobs::{self, presets};
//!
//! let config = jobs::read_job_config("prow/jobs/compass/director.yaml").unwrap();
//! let job = jobs::find_presubmit(
//!     &config.presubmits["kyma-incubator/compass"],
//!     "pre-master-compass-components-director",
//!     "master",
//! )
//! .unwrap();
//! jobs::assert_has_presets(&job.base, &[presets::DIND_ENABLED, presets::BUILD_PR]).unwrap();
//! ```

mod assertions;
pub mod presets;
mod releases;
mod types;


pub use assertions::{
    JobAssertionError, assert_exec_golang_buildpack, assert_has_extra_ref_test_infra,
    assert_has_presets, assert_postsubmit_runs_if_changed, assert_presubmit_runs_if_changed,
};
pub use releases::{SupportedRelease, release_branches_besides, release_job_name};
pub use types::{
    Brancher, Container, EnvVar, JobBase, JobConfig, PodSpec, Postsubmit, Presubmit, Refs,
};

use std::path::Path;
use thiserror::Error;

/// A job file could not be loaded.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("cannot read job config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse job config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load a Prow job file.
pub fn read_job_config<P: AsRef<Path>>(path: P) -> Result<JobConfig, JobError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| JobError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| JobError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Find the presubmit named `name` that runs against `branch`.
pub fn find_presubmit<'a>(jobs: &'a [Presubmit], name: &str, branch: &str) -> Option<&'a Presubmit> {
    jobs.iter()
        .find(|job| job.base.name == name && job.brancher.should_run(branch))
}

/// Find the postsubmit named `name` that runs against `branch`.
pub fn find_postsubmit<'a>(
    jobs: &'a [Postsubmit],
    name: &str,
    branch: &str,
) -> Option<&'a Postsubmit> {
    jobs.iter()
        .find(|job| job.base.name == name && job.brancher.should_run(branch))
}
