//! Preset labels and well-known values used by generated jobs.
//!
//! A preset is enabled on a job by the label `<preset>: "true"`.

pub const DIND_ENABLED: &str = "preset-dind-enabled";
pub const DOCKER_PUSH_REPO: &str = "preset-docker-push-repository";
pub const DOCKER_PUSH_REPO_INCUBATOR: &str = "preset-docker-push-repository-incubator";
pub const GCR_PUSH: &str = "preset-sa-gcr-push";
pub const BUILD_PR: &str = "preset-build-pr";
pub const BUILD_MASTER: &str = "preset-build-master";
pub const BUILD_RELEASE: &str = "preset-build-release";

/// Buildpack images.
pub const IMAGE_GOLANG_BUILDPACK_1_11: &str =
    "eu.gcr.io/kyma-project/prow/test-infra/buildpack-golang:v20181119-afd3fbd";

/// Entry point of every buildpack job.
pub const BUILD_SCRIPT: &str = "/home/prow/go/src/github.com/kyma-project/test-infra/prow/scripts/build.sh";

/// Where test-infra is checked out as an extra ref.
pub const TEST_INFRA_ORG: &str = "kyma-project";
pub const TEST_INFRA_REPO: &str = "test-infra";
pub const TEST_INFRA_PATH_ALIAS: &str = "github.com/kyma-project/test-infra";
