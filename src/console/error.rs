//! Error types for the interactive console.

use thiserror::Error;

/// Why a typed value could not be read from a line of input.
///
/// The prompt loop consumes these by re-asking; they never leave the console.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("not a whole number: {0:?}")]
    InvalidNumber(String),

    /// Not a number, not finite, or negative.
    #[error("not a valid price: {0:?}")]
    InvalidPrice(String),
}

/// Failures that end the console loop.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream closed; the loop treats this as Exit.
    #[error("end of input")]
    EndOfInput,
}
