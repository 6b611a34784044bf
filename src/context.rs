//! Runner context resolution for render-task-definition.
//!
//! Collects the paths the CI runner hands to a step (workspace root, temp
//! directory, output file) and the runner's debug flag. Everything here is
//! read once at startup; the patcher itself never consults the environment
//! for these values.

use crate::cli::Cli;
use crate::env::EnvLookup;
use crate::error::{RenderError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable the runner sets to `1` when step debug logging is on.
pub const RUNNER_DEBUG_VAR: &str = "RUNNER_DEBUG";

/// Resolved runner paths and flags.
#[derive(Debug, Clone)]
pub struct RunnerContext {
    /// Workspace root for relative task definition paths (`GITHUB_WORKSPACE`).
    /// When unset, relative paths resolve against the current directory.
    pub workspace: Option<PathBuf>,

    /// Directory the rendered task definition is written to (`RUNNER_TEMP`,
    /// falling back to the system temp directory).
    pub temp_dir: PathBuf,

    /// File step outputs are appended to (`GITHUB_OUTPUT`).
    pub output_file: Option<PathBuf>,

    /// Whether the runner asked for debug output.
    pub debug: bool,
}

impl RunnerContext {
    /// Build the context from parsed CLI arguments and the ambient environment.
    pub fn from_cli(cli: &Cli, env: &dyn EnvLookup) -> Self {
        Self {
            workspace: non_empty(cli.workspace.clone()),
            temp_dir: non_empty(cli.temp_dir.clone()).unwrap_or_else(env::temp_dir),
            output_file: non_empty(cli.output_file.clone()),
            debug: env.var(RUNNER_DEBUG_VAR).as_deref() == Some("1"),
        }
    }

    /// Resolve the task definition input to an absolute path.
    ///
    /// Absolute inputs are returned unchanged. Relative inputs are joined
    /// onto the workspace root, or the current directory without one.
    pub fn resolve_task_definition(&self, input: &str) -> Result<PathBuf> {
        let path = Path::new(input);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let base = match &self.workspace {
            Some(workspace) => workspace.clone(),
            None => env::current_dir().map_err(|e| {
                RenderError::Io(format!("failed to get current working directory: {}", e))
            })?,
        };

        Ok(base.join(path))
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}
