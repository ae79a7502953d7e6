use thiserror::{self, Error};

pub mod repl;
pub mod seed;

pub use repl::Repl;

#[derive(Debug, Error)]
pub enum ReplError {
    /// Derived IO error
    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),

    /// The menu choice was not one of the listed options
    #[error("Unknown option: {0:?}, expected a number from 1 to 4")]
    UnknownOption(String),

    /// The key line held no character to use as a key
    #[error("Expected a single character key, got an empty line")]
    MissingKey,
}

impl ReplError {
    /// Whether the loop can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ReplError::IoError(_))
    }
}
