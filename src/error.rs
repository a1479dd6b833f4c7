//! Error handling for the create-discord-app CLI.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for generation operations.
///
/// This enum represents all possible errors that can occur while scaffolding
/// a project. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents failures of the interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors while serializing structured output files
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
