//! Error handling for startoff.
//! Defines the error type shared by every stage and the stage-tagged error
//! returned by the pipeline.

use std::io;
use thiserror::Error;

use crate::pipeline::Stage;

/// Errors that can occur while scaffolding a project.
///
/// Each variant maps to one failure class of the pipeline. Validation errors
/// are recovered inside the prompt loop and never reach the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors raised while interacting with the terminal
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents invalid ignore or copy patterns
    #[error("Pattern error: {0}.")]
    IgnorePatternError(String),

    /// The template could not be downloaded into the staging directory
    #[error("Failed to fetch template '{reference}': {cause}.")]
    FetchError { reference: String, cause: String },

    /// The template download did not finish in time
    #[error("Fetching template '{reference}' timed out after {timeout_secs}s.")]
    FetchTimeout { reference: String, timeout_secs: u64 },

    /// A file of the staging tree could not be read, rendered or written
    #[error("Failed to materialize '{path}': {cause}.")]
    MaterializationError { path: String, cause: String },
}

impl Error {
    /// Returns true for errors raised by the fetch stage.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Error::FetchError { .. } | Error::FetchTimeout { .. })
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal error tagged with the pipeline stage it happened in.
#[derive(Error, Debug)]
#[error("Failed at stage '{stage}': {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: Error,
}

impl PipelineError {
    pub fn new(stage: Stage, source: Error) -> Self {
        Self { stage, source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler<E: std::fmt::Display>(err: E) {
    eprintln!("{err}");
    std::process::exit(1);
}
