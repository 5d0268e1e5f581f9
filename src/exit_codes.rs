//! Exit code constants for the infra-tools CLI.
//!
//! - 0: Success
//! - 1: Configuration error (bad args, unreadable or invalid config)
//! - 2: Template failure (load, header, directory, file or execution error)
//! - 3: Remote API failure (compute or GitHub)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: missing flag, unreadable or unparsable YAML.
pub const CONFIG_ERROR: i32 = 1;

/// Template failure: anything that aborts a render pass.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Remote API failure that the caller could not recover from.
pub const REMOTE_FAILURE: i32 = 3;
