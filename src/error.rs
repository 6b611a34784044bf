//! Error types for render-task-definition.
//!
//! Uses thiserror for derive macros. Messages are written for the person
//! reading the failed CI step, so they name the offending input.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for rendering a task definition.
///
/// Every variant is terminal for the run; `main` reports it once through the
/// failure channel and maps it to an exit code.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The task definition file or the requested container does not exist.
    #[error("{0}")]
    NotFound(String),

    /// `containerDefinitions` is missing or not an array.
    #[error("{0}")]
    InvalidFormat(String),

    /// The task definition is not valid JSON or is not a JSON object.
    #[error("{0}")]
    ParseError(String),

    /// A line of the literal environment block has no `=` separator.
    #[error(
        "Cannot parse the environment variable '{0}'. Environment variable pairs must be of the form NAME=value."
    )]
    MalformedPair(String),

    /// A required input was empty or not supplied.
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// The command line or an `INPUT_*` variable could not be parsed.
    #[error("{0}")]
    Usage(String),

    /// Filesystem operation failed.
    #[error("{0}")]
    Io(String),

    /// The output sink could not record an output.
    #[error("failed to set output: {0}")]
    OutputError(String),
}

impl RenderError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::NotFound(_) => exit_codes::TASK_DEFINITION_ERROR,
            RenderError::InvalidFormat(_) => exit_codes::TASK_DEFINITION_ERROR,
            RenderError::ParseError(_) => exit_codes::TASK_DEFINITION_ERROR,
            RenderError::MalformedPair(_) => exit_codes::INPUT_ERROR,
            RenderError::MissingInput(_) => exit_codes::INPUT_ERROR,
            RenderError::Usage(_) => exit_codes::INPUT_ERROR,
            RenderError::Io(_) => exit_codes::IO_FAILURE,
            RenderError::OutputError(_) => exit_codes::IO_FAILURE,
        }
    }
}

impl From<clap::Error> for RenderError {
    fn from(err: clap::Error) -> Self {
        RenderError::Usage(err.to_string().trim_end().to_string())
    }
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
