//! Exit code constants for the wtm CLI.
//!
//! - 0: Success (including a cancelled cleanup)
//! - 1: User error (bad args, invalid config, unknown worktree)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or invalid state.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: inventory listing, worktree add/remove errors.
pub const GIT_FAILURE: i32 = 3;
