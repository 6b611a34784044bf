//! Normalized action inputs.

use super::Cli;
use crate::error::{RenderError, Result};

/// The five named inputs of the action after trimming and required checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInputs {
    pub task_definition: String,
    pub container_name: String,
    pub image: String,
    pub environment_variables: Option<String>,
    pub overwritten_envs: Option<String>,
}

impl ActionInputs {
    /// Extract the inputs from parsed CLI arguments.
    ///
    /// Values are trimmed and an empty value counts as not supplied, matching
    /// how the runner passes inputs that were left out of the workflow file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            task_definition: required("task-definition", cli.task_definition.as_deref())?,
            container_name: required("container-name", cli.container_name.as_deref())?,
            image: required("image", cli.image.as_deref())?,
            environment_variables: optional(cli.environment_variables.as_deref()),
            overwritten_envs: optional(cli.overwritten_envs.as_deref()),
        })
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required(name: &str, value: Option<&str>) -> Result<String> {
    optional(value).ok_or_else(|| RenderError::MissingInput(name.to_string()))
}
