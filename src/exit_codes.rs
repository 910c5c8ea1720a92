//! Exit code constants for the steerdiff CLI.
//!
//! - 0: Success (comparison printed)
//! - 1: User error (bad args, unreadable or malformed input, bad config)
//! - 2: Differences found (only with `--exit-code`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, a steering file that cannot be parsed, or an invalid config.
pub const USER_ERROR: i32 = 1;

/// The files differ and the caller asked for a non-zero status on differences.
pub const DIFFERENCES_FOUND: i32 = 2;
