//! Loading and serializing task definitions.

use super::TaskDefinition;
use crate::error::{RenderError, Result};
use serde_json::Value;
use std::path::Path;

impl TaskDefinition {
    /// Load a task definition from disk.
    ///
    /// # Returns
    ///
    /// * `Err(RenderError::NotFound)` - The path does not exist
    /// * `Err(RenderError::Io)` - The path exists but could not be read
    /// * `Err(RenderError::ParseError)` - The content is not a JSON object
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RenderError::NotFound(format!(
                "Task definition file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            RenderError::Io(format!(
                "failed to read task definition '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content).map_err(|e| match e {
            RenderError::ParseError(msg) => {
                RenderError::ParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse a task definition from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)
            .map_err(|e| RenderError::ParseError(format!("invalid task definition JSON: {}", e)))?;
        Self::from_value(document)
    }

    /// Wrap an already parsed JSON document.
    ///
    /// The document must be a JSON object; its contents are validated lazily
    /// when a container is looked up.
    pub fn from_value(document: Value) -> Result<Self> {
        if !document.is_object() {
            return Err(RenderError::ParseError(format!(
                "task definition must be a JSON object, found {}",
                json_kind(&document)
            )));
        }
        Ok(Self { document })
    }

    /// Serialize to JSON indented with two spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self.as_value()).map_err(|e| {
            RenderError::ParseError(format!("failed to serialize task definition: {}", e))
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
