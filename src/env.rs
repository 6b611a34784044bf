//! Read-only access to the ambient environment.
//!
//! The override-by-name pass copies values out of the process environment.
//! Going through [`EnvLookup`] instead of `std::env` directly lets tests
//! supply a plain map rather than mutating the real process environment.

use std::collections::{BTreeMap, HashMap};

/// Key-value lookup of environment variables by name.
pub trait EnvLookup {
    /// Returns the value of `name`, or `None` if it is unset or not valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
