//! Exit code constants for the offshoot CLI.
//!
//! The surface is deliberately small: every failure, whether it is bad
//! input or a git call that returned non-zero, exits with 1.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, validation failure, or a failed external call.
pub const FAILURE: i32 = 1;
