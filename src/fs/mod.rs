//! Filesystem utilities for render-task-definition.
//!
//! The rendered task definition is written to a fresh, uniquely named file
//! that outlives the process so later workflow steps can pick it up.

mod temp;

pub use temp::{TempFileSpec, write_kept_temp_file};
