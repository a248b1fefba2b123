//! Error handling for create-vanilla.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while scaffolding a project.
///
/// None of these are recovered from locally: they abort the remaining
/// render and rewrite steps and surface in [`default_error_handler`].
#[derive(Error, Debug)]
pub enum Error {
    /// A template directory, the template root or the entry file is missing.
    #[error("Path '{path}' does not exist.")]
    NotFoundError { path: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A rename during the TypeScript pass would replace an existing file.
    #[error("Cannot rename '{from}' to '{to}': destination already exists.")]
    RenameCollisionError { from: String, to: String },

    /// A mergeable JSON file could not be parsed or serialized.
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur while rendering generated text or paths
    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Minijinja error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The terminal could not be used for prompting.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The user interrupted the prompts.
    #[error("✖ Operation cancelled")]
    CancelledError,
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
