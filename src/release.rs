//! Release version matching.
//!
//! Filters release version strings by optional inclusive `since`/`until`
//! bounds using semantic-version precedence. Build metadata is ignored when
//! comparing, and a release outranks its own pre-releases.
//!
//! Version strings are parsed leniently: a leading `v` is accepted and a
//! missing minor or patch component is read as `0`, so release lines such
//! as `"1.13"` can be used directly.

use semver::Version;
use std::cmp::Ordering;
use thiserror::Error;

/// A version string that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid semantic version '{input}': {reason}")]
pub struct ReleaseError {
    pub input: String,
    pub reason: String,
}

/// Parse a release version string.
///
/// # Examples
///
/// ```
/// use infra_tools::release::parse_version;
///
/// assert_eq!(parse_version("1.2").unwrap().to_string(), "1.2.0");
/// assert_eq!(parse_version("v1.2.3").unwrap().to_string(), "1.2.3");
/// assert!(parse_version("one.two").is_err());
/// ```
pub fn parse_version(input: &str) -> Result<Version, ReleaseError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    // Split off pre-release/build before padding the numeric core
    let core_end = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(core_end);

    let components = core.split('.').count();
    let padded = match components {
        1 => format!("{}.0.0{}", core, suffix),
        2 => format!("{}.0{}", core, suffix),
        _ => trimmed.to_string(),
    };

    Version::parse(&padded).map_err(|e| ReleaseError {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Check whether `release` lies within `[since, until]`.
///
/// An absent bound does not constrain that side.
///
/// ```
/// use infra_tools::release::release_matches;
///
/// assert!(release_matches("1.5.0", Some("1.0.0"), Some("2.0.0")).unwrap());
/// assert!(!release_matches("2.5.0", Some("1.0.0"), Some("2.0.0")).unwrap());
/// ```
pub fn release_matches(
    release: &str,
    since: Option<&str>,
    until: Option<&str>,
) -> Result<bool, ReleaseError> {
    let version = parse_version(release)?;

    if let Some(since) = since
        && version.cmp_precedence(&parse_version(since)?) == Ordering::Less
    {
        return Ok(false);
    }

    if let Some(until) = until
        && version.cmp_precedence(&parse_version(until)?) == Ordering::Greater
    {
        return Ok(false);
    }

    Ok(true)
}

/// Filter `releases` down to those within `[since, until]`, keeping input order.
///
/// The first unparsable version (element or bound) aborts the whole filter.
pub fn matching_releases<'a, S: AsRef<str>>(
    releases: &'a [S],
    since: Option<&str>,
    until: Option<&str>,
) -> Result<Vec<&'a S>, ReleaseError> {
    let mut matched = Vec::new();
    for release in releases {
        if release_matches(release.as_ref(), since, until)? {
            matched.push(release);
        }
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching(all: &[&str], since: Option<&str>, until: Option<&str>) -> Vec<String> {
        matching_releases(all, since, until)
            .unwrap()
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_parse_full_version() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(parse_version("1").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse_version("1.13").unwrap(), Version::new(1, 13, 0));
        assert_eq!(
            parse_version("1.2-rc1").unwrap().to_string(),
            "1.2.0-rc1"
        );
    }

    #[test]
    fn test_parse_accepts_v_prefix() {
        assert_eq!(parse_version("v2.0.1").unwrap(), Version::new(2, 0, 1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_version("release-1.2").unwrap_err();
        assert_eq!(err.input, "release-1.2");
        assert!(err.to_string().contains("invalid semantic version 'release-1.2'"));

        assert!(parse_version("").is_err());
        assert!(parse_version("1.2.3.4").is_err());
    }

    #[test]
    fn test_release_matches_inside_bounds() {
        assert!(release_matches("1.5.0", Some("1.0.0"), Some("2.0.0")).unwrap());
    }

    #[test]
    fn test_release_matches_outside_bounds() {
        assert!(!release_matches("2.5.0", Some("1.0.0"), Some("2.0.0")).unwrap());
        assert!(!release_matches("0.9.0", Some("1.0.0"), Some("2.0.0")).unwrap());
    }

    #[test]
    fn test_release_matches_bounds_are_inclusive() {
        assert!(release_matches("1.0.0", Some("1.0.0"), Some("2.0.0")).unwrap());
        assert!(release_matches("2.0.0", Some("1.0.0"), Some("2.0.0")).unwrap());
    }

    #[test]
    fn test_release_matches_absent_bounds() {
        assert!(release_matches("0.0.1", None, None).unwrap());
        assert!(release_matches("99.0.0", Some("1.0.0"), None).unwrap());
        assert!(release_matches("0.1.0", None, Some("1.0.0")).unwrap());
    }

    #[test]
    fn test_prerelease_precedes_release() {
        assert!(!release_matches("1.0.0-rc1", Some("1.0.0"), None).unwrap());
        assert!(release_matches("1.0.0-rc1", None, Some("1.0.0")).unwrap());
        assert!(release_matches("1.0.0-rc.2", Some("1.0.0-rc.1"), None).unwrap());
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert!(release_matches("1.0.0+build.5", Some("1.0.0"), Some("1.0.0")).unwrap());
        assert_eq!(
            parse_version("1.0.0+a")
                .unwrap()
                .cmp_precedence(&parse_version("1.0.0+b").unwrap()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_release_matches_invalid_bound_is_error() {
        assert!(release_matches("1.0.0", Some("latest"), None).is_err());
        assert!(release_matches("1.0.0", None, Some("x.y")).is_err());
        assert!(release_matches("nope", None, None).is_err());
    }

    #[test]
    fn test_matching_releases_since() {
        assert_eq!(
            matching(&["1.0.0", "1.2.0", "2.0.0"], Some("1.1.0"), None),
            vec!["1.2.0", "2.0.0"]
        );
    }

    #[test]
    fn test_matching_releases_preserves_input_order() {
        assert_eq!(
            matching(&["2.0.0", "1.0.0", "1.5.0", "3.0.0"], Some("1.0.0"), Some("2.0.0")),
            vec!["2.0.0", "1.0.0", "1.5.0"]
        );
    }

    #[test]
    fn test_matching_releases_short_versions() {
        assert_eq!(
            matching(&["1.11", "1.12", "1.13"], None, Some("1.12")),
            vec!["1.11", "1.12"]
        );
    }

    #[test]
    fn test_matching_releases_empty_input() {
        assert!(matching(&[], Some("1.0.0"), None).is_empty());
    }

    #[test]
    fn test_matching_releases_invalid_element_aborts() {
        let result = matching_releases(&["1.0.0", "bogus", "2.0.0"], None, None);
        assert_eq!(result.unwrap_err().input, "bogus");
    }
}
