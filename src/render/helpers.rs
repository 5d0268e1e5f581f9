//! Template helpers.
//!
//! Two release helpers backed by [`crate::release`]:
//!
//! - `matchingReleases all since until` returns the releases within bounds
//! - `releaseMatches version since until` returns whether one release is
//!
//! Pass `null` for an open bound, e.g.
//! `{{#each (matchingReleases Global.releases "1.2" null)}}`.
//!
//! The rest is a small string and collection library in the spirit of
//! sprig: `upper`, `lower`, `trim`, `replace`, `quote`, `contains`,
//! `hasPrefix`, `hasSuffix`, `split`, `join`, `has`, `first`, `last`,
//! `default`, `toJson` and `indent`.

use crate::release;
use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, RenderErrorReason,
    ScopedJson, handlebars_helper,
};
use serde_json::Value as Json;

/// Register every helper on `registry`.
pub fn register_all(registry: &mut Handlebars<'_>) {
    registry.register_helper("matchingReleases", Box::new(MatchingReleases));
    registry.register_helper("releaseMatches", Box::new(ReleaseMatches));

    registry.register_helper("upper", Box::new(upper));
    registry.register_helper("lower", Box::new(lower));
    registry.register_helper("trim", Box::new(trim));
    registry.register_helper("replace", Box::new(replace));
    registry.register_helper("quote", Box::new(quote));
    registry.register_helper("contains", Box::new(contains));
    registry.register_helper("hasPrefix", Box::new(has_prefix));
    registry.register_helper("hasSuffix", Box::new(has_suffix));
    registry.register_helper("split", Box::new(split));
    registry.register_helper("join", Box::new(join));
    registry.register_helper("has", Box::new(has));
    registry.register_helper("first", Box::new(first));
    registry.register_helper("last", Box::new(last));
    registry.register_helper("default", Box::new(DefaultValue));
    registry.register_helper("toJson", Box::new(to_json));
    registry.register_helper("indent", Box::new(indent));
}

struct MatchingReleases;

impl HelperDef for MatchingReleases {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let all = param(h, 0, "matchingReleases")?;
        let Json::Array(all) = all else {
            return Err(helper_error(
                "matchingReleases",
                format!("expected a list of releases, got {}", all),
            ));
        };
        let (since, until) = bounds(h, "matchingReleases")?;

        let versions = all
            .iter()
            .map(|rel| release_str(rel, "matchingReleases"))
            .collect::<Result<Vec<_>, _>>()?;
        let matched = release::matching_releases(&versions, since, until)
            .map_err(|e| helper_error("matchingReleases", e.to_string()))?;

        Ok(ScopedJson::Derived(Json::Array(
            matched
                .into_iter()
                .map(|rel| Json::String(rel.to_string()))
                .collect(),
        )))
    }
}

struct ReleaseMatches;

impl HelperDef for ReleaseMatches {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let version = release_str(param(h, 0, "releaseMatches")?, "releaseMatches")?;
        let (since, until) = bounds(h, "releaseMatches")?;

        let matches = release::release_matches(version, since, until)
            .map_err(|e| helper_error("releaseMatches", e.to_string()))?;

        Ok(ScopedJson::Derived(Json::Bool(matches)))
    }
}

/// `default fallback value`: `value` unless it is missing or empty.
struct DefaultValue;

impl HelperDef for DefaultValue {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let fallback = param(h, 0, "default")?;
        let value = h
            .param(1)
            .filter(|p| !p.is_value_missing())
            .map(|p| p.value())
            .filter(|v| !is_empty(v));

        Ok(ScopedJson::Derived(value.unwrap_or(fallback).clone()))
    }
}

fn param<'a>(h: &'a Helper<'_>, index: usize, helper: &str) -> Result<&'a Json, RenderError> {
    h.param(index)
        .map(|p| p.value())
        .ok_or_else(|| helper_error(helper, format!("missing argument {}", index + 1)))
}

/// Read the optional `since` and `until` arguments; `null` or omitted means unbounded.
fn bounds<'a>(
    h: &'a Helper<'_>,
    helper: &str,
) -> Result<(Option<&'a str>, Option<&'a str>), RenderError> {
    let bound = move |index: usize| -> Result<Option<&'a str>, RenderError> {
        match h.param(index).map(|p| p.value()) {
            None | Some(Json::Null) => Ok(None),
            Some(Json::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(helper_error(
                helper,
                format!("bound must be a version string or null, got {}", other),
            )),
        }
    };
    Ok((bound(1)?, bound(2)?))
}

fn release_str<'a>(value: &'a Json, helper: &str) -> Result<&'a str, RenderError> {
    value.as_str().ok_or_else(|| {
        helper_error(
            helper,
            format!("release must be a version string, got {}", value),
        )
    })
}

fn helper_error(helper: &str, message: String) -> RenderError {
    RenderErrorReason::Other(format!("{}: {}", helper, message)).into()
}

/// Render a value the way it would appear inline in a template.
fn display(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        Json::Null => String::new(),
        other => other.to_string(),
    }
}

/// Empty in the sense of `default`: null, false, zero, or an empty string/list/map.
fn is_empty(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::Bool(b) => !b,
        Json::Number(n) => n.as_f64() == Some(0.0),
        Json::String(s) => s.is_empty(),
        Json::Array(a) => a.is_empty(),
        Json::Object(o) => o.is_empty(),
    }
}

handlebars_helper!(upper: |s: str| s.to_uppercase());
handlebars_helper!(lower: |s: str| s.to_lowercase());
handlebars_helper!(trim: |s: str| s.trim().to_string());
handlebars_helper!(replace: |s: str, from: str, to: str| s.replace(from, to));
handlebars_helper!(quote: |s: str| format!("{:?}", s));
handlebars_helper!(contains: |s: str, needle: str| s.contains(needle));
handlebars_helper!(has_prefix: |s: str, prefix: str| s.starts_with(prefix));
handlebars_helper!(has_suffix: |s: str, suffix: str| s.ends_with(suffix));
handlebars_helper!(split: |s: str, sep: str| {
    s.split(sep).map(|part| Json::String(part.to_string())).collect::<Vec<_>>()
});
handlebars_helper!(join: |list: array, sep: str| {
    list.iter().map(display).collect::<Vec<_>>().join(sep)
});
handlebars_helper!(has: |list: array, item: Json| list.contains(item));
handlebars_helper!(first: |list: array| list.first().cloned().unwrap_or(Json::Null));
handlebars_helper!(last: |list: array| list.last().cloned().unwrap_or(Json::Null));
handlebars_helper!(to_json: |value: Json| serde_json::to_string(value).unwrap_or_default());
handlebars_helper!(indent: |spaces: u64, s: str| {
    let pad = " ".repeat(spaces as usize);
    s.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
});
