//! Release branches that jobs are generated for.

use std::fmt;

/// A release line with its own set of release jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedRelease {
    Release12,
    Release13,
    Release14,
}

impl SupportedRelease {
    pub const ALL: [SupportedRelease; 3] = [Self::Release12, Self::Release13, Self::Release14];

    /// Version number, e.g. `1.2`.
    pub fn version(self) -> &'static str {
        match self {
            Self::Release12 => "1.2",
            Self::Release13 => "1.3",
            Self::Release14 => "1.4",
        }
    }

    /// Branch name, e.g. `release-1.2`.
    pub fn branch(self) -> String {
        format!("release-{}", self.version())
    }
}

impl fmt::Display for SupportedRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.branch())
    }
}

/// Release branches for every supported release except `unsupported`.
pub fn release_branches_besides(unsupported: &[SupportedRelease]) -> Vec<String> {
    SupportedRelease::ALL
        .iter()
        .filter(|r| !unsupported.contains(r))
        .map(|r| r.branch())
        .collect()
}

/// Presubmit name of a release job: `pre-rel13-<name>` for `release-1.3`.
pub fn release_job_name(name: &str, release_branch: &str) -> String {
    let digits: String = release_branch
        .trim_start_matches("release-")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    format!("pre-rel{}-{}", digits, name)
}
