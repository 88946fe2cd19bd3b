//! Error types for the tutorial session.
//!
//! A run fails for exactly two reasons: the console stream itself broke, or
//! a token that had to be an integer was not one. Out-of-range table sizes
//! are not errors; the session degrades gracefully and keeps going.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("expected an integer, got '{token}'")]
    InvalidNumber { token: String },
    #[error("unexpected end of input")]
    UnexpectedEof,
}
