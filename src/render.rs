//! The render procedure.
//!
//! load → locate container → set image → override from environment →
//! merge literal block → serialize → write kept temp file → report.
//!
//! Every step either succeeds or aborts the run. All mutation happens on the
//! in-memory document, so nothing reaches disk unless every earlier step
//! succeeded.

use crate::action::{OutputSink, TASK_DEFINITION_OUTPUT};
use crate::cli::{ActionInputs, Cli};
use crate::context::RunnerContext;
use crate::env::EnvLookup;
use crate::error::Result;
use crate::fs::{TempFileSpec, write_kept_temp_file};
use crate::taskdef::TaskDefinition;
use std::path::PathBuf;
use tracing::{debug, info};

/// Naming of the rendered file inside the runner temp directory.
pub const RENDERED_FILE: TempFileSpec<'static> = TempFileSpec {
    prefix: "task-definition-",
    suffix: ".json",
};

/// Parse the inputs, render the task definition, and report its path.
pub fn run(
    cli: &Cli,
    ctx: &RunnerContext,
    env: &dyn EnvLookup,
    sink: &mut dyn OutputSink,
) -> Result<PathBuf> {
    let inputs = ActionInputs::from_cli(cli)?;
    let path = render(&inputs, ctx, env)?;
    sink.set_output(TASK_DEFINITION_OUTPUT, &path.to_string_lossy())?;
    Ok(path)
}

/// Render the task definition and write it to a new file.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the rendered file in the runner temp directory
/// * `Err(RenderError::NotFound)` - File missing or no container with that name
/// * `Err(RenderError::InvalidFormat)` - `containerDefinitions` missing or not an array
/// * `Err(RenderError::ParseError)` - File is not a JSON object
/// * `Err(RenderError::MalformedPair)` - A literal environment line has no `=`
/// * `Err(RenderError::Io)` - Reading or writing failed
pub fn render(
    inputs: &ActionInputs,
    ctx: &RunnerContext,
    env: &dyn EnvLookup,
) -> Result<PathBuf> {
    let source = ctx.resolve_task_definition(&inputs.task_definition)?;
    debug!(path = %source.display(), "loading task definition");
    let mut task = TaskDefinition::load(&source)?;

    let index = task.find_container(&inputs.container_name)?;
    debug!(
        container = %inputs.container_name,
        position = index.position(),
        "found container definition"
    );

    task.set_image(index, &inputs.image)?;
    info!(container = %inputs.container_name, image = %inputs.image, "set container image");

    if let Some(names) = &inputs.overwritten_envs {
        task.override_from_env(index, names, env)?;
    }

    if let Some(block) = &inputs.environment_variables {
        task.merge_env_block(index, block)?;
    }

    let variables: Vec<String> = task
        .environment(index)
        .into_iter()
        .map(|pair| pair.name)
        .collect();
    debug!(?variables, "container environment");

    let content = task.to_json_pretty()?;
    let rendered = write_kept_temp_file(&ctx.temp_dir, RENDERED_FILE, content.as_bytes())?;
    info!(path = %rendered.display(), "wrote rendered task definition");

    Ok(rendered)
}
