//! infra-tools: helpers for maintaining a CI infrastructure repository.
//!
//! - [`render`] turns a templates config into generated files with an
//!   autogenerated header.
//! - [`release`] answers whether a release version falls inside a range.
//! - [`cleaner`] reports Compute Engine forwarding rules left behind by
//!   closed pull requests.
//! - [`jobs`] loads Prow job configs and checks their properties in tests.

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod gcp;
pub mod github;
pub mod jobs;
pub mod release;
pub mod render;

#[cfg(test)]
pub(crate) mod test_support;
