//! Error types for console input.

use std::io;
use thiserror::Error;

/// Errors raised while reading user input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input stream is exhausted.
    #[error("End of input")]
    EndOfInput,

    /// A token could not be read as an integer.
    #[error("Invalid input '{token}', expected an integer.")]
    NotAnInteger { token: String },

    /// I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for console input operations.
pub type InputResult<T> = Result<T, InputError>;
