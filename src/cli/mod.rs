//! CLI argument parsing for render-task-definition.
//!
//! Uses clap derive macros for declarative argument definitions. Every action
//! input can be passed as a flag or through the `INPUT_<NAME>` environment
//! variable the CI runner exports for each `with:` entry, so the same binary
//! works both as a workflow step and from a shell.

mod inputs;

pub use inputs::ActionInputs;

use clap::Parser;
use std::path::PathBuf;

/// Render a task definition with a new container image and environment overrides.
///
/// Loads the task definition JSON, points the named container at the given
/// image, merges environment overrides, and writes the result to a new file
/// whose path is reported as the `task-definition` output.
#[derive(Parser, Debug)]
#[command(name = "render-task-definition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task definition JSON file, absolute or relative to the workspace.
    #[arg(long, env = "INPUT_TASK-DEFINITION")]
    pub task_definition: Option<String>,

    /// Name of the container definition whose image should be replaced.
    #[arg(long, env = "INPUT_CONTAINER-NAME")]
    pub container_name: Option<String>,

    /// Image URI to set on the container.
    #[arg(long, env = "INPUT_IMAGE")]
    pub image: Option<String>,

    /// Newline-separated NAME=value pairs merged into the container environment.
    #[arg(long, env = "INPUT_ENVIRONMENT-VARIABLES")]
    pub environment_variables: Option<String>,

    /// Comma-separated variable names whose values are copied from this process's environment.
    #[arg(long, env = "INPUT_OVERWRITTEN-ENVS")]
    pub overwritten_envs: Option<String>,

    /// Workspace root used to resolve a relative task definition path.
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Directory the rendered task definition is written to.
    #[arg(long, env = "RUNNER_TEMP")]
    pub temp_dir: Option<PathBuf>,

    /// File step outputs are appended to.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments (and their environment fallbacks).
    ///
    /// Errors are returned rather than printed so the caller can report them
    /// through the runner's failure channel.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}
