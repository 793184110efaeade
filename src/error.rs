//! Errors raised while scanning tokens.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// Input ran out before another token was found.
    #[error("unexpected end of input")]
    EndOfInput,

    #[error("cannot parse {token:?} as {kind}")]
    Parse { token: String, kind: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    pub fn is_end_of_input(&self) -> bool {
        match self {
            ScanError::EndOfInput => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
