//! Task definition document model.
//!
//! A task definition is kept as an owned `serde_json::Value` tree rather than
//! a typed struct: only `containerDefinitions`, a container's `name`, `image`
//! and `environment`, and an environment entry's `name`/`value` are
//! interpreted. Every other field passes through untouched, and with
//! `preserve_order` enabled the rendered file keeps the input's key order.
//!
//! # Shape
//!
//! ```text
//! {
//!   "family": "web",
//!   "containerDefinitions": [
//!     {
//!       "name": "web",
//!       "image": "registry.example.com/web:old",
//!       "environment": [ { "name": "LOG_LEVEL", "value": "info" } ]
//!     }
//!   ]
//! }
//! ```
//!
//! Lookups by name are "first match wins" for both containers and
//! environment entries; duplicates further down are left alone.

use serde::Serialize;
use serde_json::Value;

mod container;
mod env_block;
mod environment;
mod io;

pub use env_block::{parse_env_block, parse_name_list};

/// Field holding the container list on the document.
pub const CONTAINER_DEFINITIONS: &str = "containerDefinitions";

/// Field holding a container's environment list.
pub const ENVIRONMENT: &str = "environment";

/// Field holding a container's image reference.
pub const IMAGE: &str = "image";

/// A parsed task definition document.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDefinition {
    document: Value,
}

/// Position of a container inside `containerDefinitions`.
///
/// Only [`TaskDefinition::find_container`] hands these out, so an index
/// always refers to the container that was matched by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerIndex(usize);

impl ContainerIndex {
    /// Zero-based position in `containerDefinitions`.
    pub fn position(self) -> usize {
        self.0
    }
}

/// One `NAME=value` environment variable.
/// Serializes to a `{ "name": ..., "value": ... }` environment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvPair {
    pub name: String,
    pub value: String,
}

impl EnvPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl TaskDefinition {
    /// The underlying JSON document.
    pub fn as_value(&self) -> &Value {
        &self.document
    }
}
