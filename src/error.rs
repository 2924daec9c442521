//! Error types shared by the dynamic programming routines.

use thiserror::Error;

/// Errors returned by the algorithms in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The arguments do not describe a valid problem instance.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A result or intermediate value does not fit the fixed-width integer type.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Error::Overflow(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
