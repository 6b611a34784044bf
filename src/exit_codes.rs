//! Exit code constants for render-task-definition.
//!
//! The runner treats any non-zero exit as a failed step; the distinct codes
//! exist so scripts invoking the binary directly can tell failures apart:
//! - 0: Success
//! - 1: Task definition rejected (missing file, bad format, unknown container)
//! - 2: Bad input (missing required input, malformed environment line)
//! - 3: I/O or runner failure (temp file, output file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The task definition could not be loaded or did not have the expected shape.
pub const TASK_DEFINITION_ERROR: i32 = 1;

/// A required input was missing or an input value could not be parsed.
pub const INPUT_ERROR: i32 = 2;

/// Reading, writing, or reporting through the runner failed.
pub const IO_FAILURE: i32 = 3;
