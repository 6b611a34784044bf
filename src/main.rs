//! render-task-definition: point a container task definition at a new image.
//!
//! This is the entry point for the CI step. It parses the action inputs,
//! renders the task definition, and reports either the rendered file path or
//! a single failure message to the runner, exiting with a code that matches
//! the kind of failure.

pub mod action;
mod cli;
pub mod context;
pub mod env;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
mod render;
pub mod taskdef;

#[cfg(test)]
mod test_support;

use action::{GithubOutput, OutputSink};
use cli::Cli;
use context::RunnerContext;
use env::ProcessEnv;
use error::RenderError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        // --help and --version print and exit successfully.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return report_failure(&mut GithubOutput::new(None), &err.into()),
    };
    let ctx = RunnerContext::from_cli(&cli, &ProcessEnv);
    logging::init(ctx.debug);

    let mut sink = GithubOutput::new(ctx.output_file.clone());

    match render::run(&cli, &ctx, &ProcessEnv, &mut sink) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => report_failure(&mut sink, &err),
    }
}

/// Report a terminal error once through the sink and pick the exit code.
fn report_failure(sink: &mut dyn OutputSink, err: &RenderError) -> ExitCode {
    tracing::debug!(error = ?err, "render failed");
    sink.set_failed(&err.to_string());
    ExitCode::from(err.exit_code() as u8)
}
