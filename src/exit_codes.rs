//! Exit code constants for the chainup CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, invalid config)
//! - 2: Resolution failure (token matches no branch, invalid chain)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: malformed chain, unknown option, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Resolution failure: a token matched no branch, or the resolved chain is invalid.
pub const RESOLUTION_FAILURE: i32 = 2;

/// Git operation failure: fetch, switch, pull, merge, push or listing errors.
pub const GIT_FAILURE: i32 = 3;
